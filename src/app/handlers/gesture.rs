//! Handler für den Gesten-Lebenszyklus (Linear- und Parabel-Modus).

use super::display::{report_fit_error, show_fit};
use crate::app::AppState;
use crate::core::Gesture;
use crate::fit::FitRequest;
use glam::DVec2;

/// Beginnt eine neue Geste.
///
/// Eine noch laufende Geste wird verworfen. Die gezeichnete Kurve
/// verschwindet, die Gleichung bleibt bis zum nächsten Fit stehen.
pub fn begin(state: &mut AppState, pos: DVec2) {
    if state.session.gesture.is_some() {
        log::debug!("Laufende Geste verworfen, neuer Start bei {:?}", pos);
    }
    state.session.display.clear_curve();
    state.session.gesture = Some(Gesture::begin(pos));
}

/// Hängt einen Punkt an die laufende Geste an.
pub fn extend(state: &mut AppState, pos: DVec2) {
    match state.session.gesture.as_mut() {
        Some(gesture) => gesture.push(pos),
        None => log::debug!("Bewegung ohne aktive Geste ignoriert"),
    }
}

/// Schließt die laufende Geste ab und fittet sie im aktiven Modus.
pub fn finish(state: &mut AppState) {
    let Some(gesture) = state.session.gesture.take() else {
        log::debug!("Gesten-Ende ohne aktive Geste ignoriert");
        return;
    };
    let Some(request) = FitRequest::for_gesture(state.session.mode, &gesture) else {
        return;
    };

    log::debug!(
        "Geste mit {} Punkten abgeschlossen ({:?})",
        gesture.len(),
        state.session.mode
    );
    let anchor_x = request.anchor_x();
    match request.fit() {
        Ok(model) => show_fit(state, model, anchor_x),
        Err(e) => report_fit_error(state, e),
    }
}
