//! Begrenztes Rendering: erkannte Modelle → sichtbare Polylinie + Gleichung.
//!
//! Liefert reine Daten in logischen Koordinaten; die Umrechnung in
//! Bildschirm-Pixel übernimmt der Aufrufer.

mod equation;
mod line_clip;
mod parabola;

pub use equation::{format_equation, format_linear, format_number, format_quadratic};
pub use line_clip::{clip_line, VERTICAL_SLOPE_LIMIT};
pub use parabola::{sample_parabola, visible_x_range, PARABOLA_SAMPLE_STEP};

use crate::core::ViewportBounds;
use crate::fit::CurveModel;
use glam::DVec2;

/// Sichtbare Polylinie eines Modells (leer, wenn es den Bereich nicht trifft).
///
/// `anchor_x` wird nur für fast senkrechte Geraden verwendet.
pub fn render_model(
    model: &CurveModel,
    bounds: &ViewportBounds,
    anchor_x: f64,
    sample_step: f64,
) -> Vec<DVec2> {
    match model {
        CurveModel::Linear(m) => clip_line(m, bounds, anchor_x),
        CurveModel::Quadratic(m) => sample_parabola(m, bounds, sample_step),
    }
}

/// Anzeige-Ergebnis eines Fits.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCurve {
    /// Modell in voller Genauigkeit
    pub model: CurveModel,
    /// Sichtbare Polylinie in logischen Koordinaten
    pub polyline: Vec<DVec2>,
    /// Gleichung mit gerundeten Koeffizienten
    pub equation: String,
}

impl RenderedCurve {
    /// Rendert ein Modell für die Anzeige.
    pub fn build(
        model: CurveModel,
        bounds: &ViewportBounds,
        anchor_x: f64,
        sample_step: f64,
    ) -> Self {
        Self {
            polyline: render_model(&model, bounds, anchor_x, sample_step),
            equation: format_equation(&model),
            model,
        }
    }
}
