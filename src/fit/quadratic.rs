//! Parabel durch drei Ankerpunkte einer Geste.

use super::gauss::{solve_linear_system, LinearSolve};
use super::{FitError, QuadraticModel, SINGULAR_EPSILON};
use crate::core::Gesture;
use glam::DVec2;

/// Mindestanzahl Gesten-Punkte für eine Parabel.
pub const QUADRATIC_MIN_POINTS: usize = 3;

/// Die drei Interpolations-Stützstellen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub start: DVec2,
    pub apex: DVec2,
    pub end: DVec2,
}

/// Wählt Start, Scheitel (höchster Punkt) und Ende.
///
/// Fällt der höchste Punkt mit Start oder Ende zusammen, wird der Punkt
/// bei Index `n / 2` genommen (Vergleich nach Wert, nicht nach Index).
pub fn select_anchors(gesture: &Gesture) -> Anchors {
    let start = gesture.start();
    let end = gesture.end();
    let mut apex = gesture.highest();
    if apex == start || apex == end {
        apex = gesture.points()[gesture.len() / 2];
    }
    Anchors { start, apex, end }
}

/// Parabel-Fit einer Geste: Interpolation, bei singulärer Matrix Scheitelform.
pub fn fit_quadratic(gesture: &Gesture) -> Result<QuadraticModel, FitError> {
    if gesture.len() < QUADRATIC_MIN_POINTS {
        return Err(FitError::InsufficientPoints {
            required: QUADRATIC_MIN_POINTS,
            actual: gesture.len(),
        });
    }

    let anchors = select_anchors(gesture);
    match interpolate(&anchors) {
        LinearSolve::Solution([a, b, c]) => Ok(QuadraticModel { a, b, c }),
        LinearSolve::Singular { column } => {
            log::debug!("Parabel-Matrix singulär (Spalte {column}), Scheitelform-Fallback");
            Ok(fit_vertex_form(&anchors))
        }
    }
}

/// Löst `[x², x, 1]·[a, b, c]ᵗ = y` für die drei Anker.
pub fn interpolate(anchors: &Anchors) -> LinearSolve<3> {
    let row = |p: DVec2| [p.x * p.x, p.x, 1.0];
    let matrix = [row(anchors.start), row(anchors.apex), row(anchors.end)];
    let rhs = [anchors.start.y, anchors.apex.y, anchors.end.y];
    solve_linear_system(matrix, rhs)
}

/// Scheitelform `y = a(x-h)² + k` mit dem Apex als Scheitel `(h, k)`.
///
/// `a` kommt aus dem Start (bevorzugt) oder dem Ende, je nachdem welcher
/// Punkt horizontal vom Scheitel entfernt liegt. Liegen alle drei Anker
/// auf einer Senkrechten, ergibt sich die Waagerechte `y = k`.
pub fn fit_vertex_form(anchors: &Anchors) -> QuadraticModel {
    let h = anchors.apex.x;
    let k = anchors.apex.y;

    let reference = [anchors.start, anchors.end]
        .into_iter()
        .find(|p| (p.x - h).abs() > SINGULAR_EPSILON);
    let a = match reference {
        Some(p) => (p.y - k) / ((p.x - h) * (p.x - h)),
        None => 0.0,
    };

    QuadraticModel {
        a,
        b: -2.0 * a * h,
        c: a * h * h + k,
    }
}
