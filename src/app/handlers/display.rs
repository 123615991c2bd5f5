//! Gemeinsame Anzeige-Schritte nach einem Fit-Versuch.

use crate::app::AppState;
use crate::fit::{CurveModel, FitError};
use crate::render::RenderedCurve;

/// Rendert ein Modell gegen die aktuellen Bounds und übernimmt es in die Anzeige.
pub(super) fn show_fit(state: &mut AppState, model: CurveModel, anchor_x: f64) {
    let curve = RenderedCurve::build(
        model,
        &state.options.bounds,
        anchor_x,
        state.options.parabola_sample_step,
    );
    if curve.polyline.is_empty() {
        log::info!("Kurve {} liegt außerhalb des Zeichenbereichs", curve.equation);
    } else {
        log::info!("Kurve erkannt: {}", curve.equation);
    }
    state.session.display.show(curve);
    state.ui.status_message = None;
}

/// Meldet einen Eingabefehler; die bisherige Anzeige bleibt unverändert.
pub(super) fn report_fit_error(state: &mut AppState, error: FitError) {
    log::warn!("Fit nicht möglich: {}", error);
    state.ui.status_message = Some(error.to_string());
}
