//! Kurven-Erkennung: Gerade, Parabel und Regressionsgerade.
//!
//! Jeder Modus liefert ein `CurveModel`; die Auswahl des Verfahrens
//! erfolgt über `FitRequest`. Numerische Sonderfälle haben feste
//! Fallbacks und sind keine Fehler, nur zu wenige Punkte sind es.

mod gauss;
mod linear;
mod model;
mod quadratic;
mod regression;

pub use gauss::{solve_linear_system, LinearSolve, SINGULAR_EPSILON};
pub use linear::fit_linear;
pub use model::{round2, CurveModel, LinearModel, QuadraticModel};
pub use quadratic::{
    fit_quadratic, fit_vertex_form, interpolate, select_anchors, Anchors, QUADRATIC_MIN_POINTS,
};
pub use regression::{fit_regression, REGRESSION_MIN_POINTS};

use crate::core::{Gesture, Mode};
use glam::DVec2;

/// Eingabefehler: der Fit ist mit den vorhandenen Daten nicht möglich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FitError {
    /// Zu wenige Punkte für das gewählte Modell
    #[error("Zu wenige Punkte: mindestens {required} benötigt, {actual} vorhanden")]
    InsufficientPoints { required: usize, actual: usize },
}

/// Eingefrorene Eingabe eines Fits, markiert mit dem Verfahren.
#[derive(Debug, Clone, Copy)]
pub enum FitRequest<'a> {
    /// Zwei-Punkt-Gerade aus Start/Ende der Geste
    Linear(&'a Gesture),
    /// Drei-Punkt-Parabel aus der Geste
    Quadratic(&'a Gesture),
    /// Ausgleichsgerade über Einzelpunkte
    Regression(&'a [DVec2]),
}

impl<'a> FitRequest<'a> {
    /// Baut die Anfrage für eine abgeschlossene Geste im gegebenen Modus.
    ///
    /// Im Regressions-Modus gibt es keine Gesten-Fits (`None`).
    pub fn for_gesture(mode: Mode, gesture: &'a Gesture) -> Option<Self> {
        match mode {
            Mode::Linear => Some(FitRequest::Linear(gesture)),
            Mode::Quadratic => Some(FitRequest::Quadratic(gesture)),
            Mode::Regression => None,
        }
    }

    /// Führt den Fit aus.
    pub fn fit(&self) -> Result<CurveModel, FitError> {
        match self {
            FitRequest::Linear(gesture) => Ok(CurveModel::Linear(fit_linear(
                gesture.start(),
                gesture.end(),
            ))),
            FitRequest::Quadratic(gesture) => fit_quadratic(gesture).map(CurveModel::Quadratic),
            FitRequest::Regression(points) => fit_regression(points).map(CurveModel::Linear),
        }
    }

    /// X der Senkrechten, falls eine Gerade fast senkrecht gerendert wird.
    pub fn anchor_x(&self) -> f64 {
        match self {
            FitRequest::Linear(gesture) | FitRequest::Quadratic(gesture) => gesture.start().x,
            FitRequest::Regression(points) => {
                if points.is_empty() {
                    0.0
                } else {
                    points.iter().map(|p| p.x).sum::<f64>() / points.len() as f64
                }
            }
        }
    }
}
