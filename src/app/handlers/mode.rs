//! Handler für den Moduswechsel.

use crate::app::AppState;
use crate::core::Mode;

/// Wechselt den Modus und verwirft Geste, Punkte, Kurve und Gleichung.
pub fn set_mode(state: &mut AppState, mode: Mode) {
    state.session.reset(mode);
    state.ui.status_message = None;
    log::info!("Modus gewechselt: {}", mode.label());
}
