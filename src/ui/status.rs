//! Status-Bar am unteren Bildschirmrand: Gleichung und Meldungen.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let equation = state.session.display.equation.as_deref().unwrap_or("");
            ui.label(egui::RichText::new(equation).size(20.0).strong());

            ui.separator();

            if let Some(msg) = &state.ui.status_message {
                ui.colored_label(egui::Color32::from_rgb(200, 60, 40), msg);
            } else {
                ui.label(state.session.mode.hint());
            }
        });
    });
}
