//! Handler für getippte Punkte und die Regressionsgerade.

use super::display::{report_fit_error, show_fit};
use crate::app::AppState;
use crate::fit::FitRequest;
use glam::DVec2;

/// Fügt einen getippten Punkt hinzu.
///
/// Nach einem Fit beginnt der erste neue Punkt eine frische Sammlung;
/// die alte Gerade verschwindet dann, die Gleichung bleibt stehen.
pub fn add_point(state: &mut AppState, pos: DVec2) {
    let was_fitted = state.session.regression.is_fitted();
    match state.session.regression.insert(pos, &state.options.bounds) {
        Ok(()) => {
            if was_fitted {
                state.session.display.clear_curve();
            }
            state.ui.status_message = None;
            log::debug!(
                "Regressions-Punkt ({:.2}, {:.2}) hinzugefügt, {} gesamt",
                pos.x,
                pos.y,
                state.session.regression.len()
            );
        }
        Err(e) => {
            log::warn!("{}", e);
            state.ui.status_message = Some(e.to_string());
        }
    }
}

/// Fittet die Regressionsgerade über alle gesammelten Punkte.
pub fn fit(state: &mut AppState) {
    let request = FitRequest::Regression(state.session.regression.points());
    let anchor_x = request.anchor_x();
    match request.fit() {
        Ok(model) => {
            state.session.regression.mark_fitted();
            show_fit(state, model, anchor_x);
        }
        Err(e) => report_fit_error(state, e),
    }
}

/// Verwirft alle Punkte samt Gerade und Gleichung.
pub fn clear(state: &mut AppState) {
    state.session.regression.clear();
    state.session.display.clear();
    state.ui.status_message = None;
    log::info!("Regressions-Punkte verworfen");
}
