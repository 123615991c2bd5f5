//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let session = &state.session;

    RenderScene {
        mode: session.mode,
        sketch: session
            .gesture
            .as_ref()
            .map(|g| g.points().to_vec())
            .unwrap_or_default(),
        curve: session.display.polyline.clone(),
        points: session.regression.points().to_vec(),
        equation: session.display.equation.clone(),
        options: state.options.clone(),
    }
}
