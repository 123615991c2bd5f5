//! Toolbar für Modus-Auswahl und Regressions-Aktionen.

use crate::app::{AppIntent, AppState};
use crate::core::Mode;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.session.mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Modus:");
            ui.separator();

            for mode in Mode::ALL {
                if ui.selectable_label(active == mode, mode.label()).clicked() {
                    events.push(AppIntent::ModeChanged { mode });
                }
            }

            // ── Regression: Punkte sammeln, dann erzeugen ──
            if active == Mode::Regression {
                ui.separator();
                let point_count = state.session.regression.len();
                if ui
                    .add_enabled(point_count > 0, egui::Button::new("Erzeugen"))
                    .clicked()
                {
                    events.push(AppIntent::RegressionGenerateRequested);
                }
                if ui
                    .add_enabled(point_count > 0, egui::Button::new("Leeren"))
                    .clicked()
                {
                    events.push(AppIntent::RegressionClearRequested);
                }
                ui.label(format!("Punkte: {}", point_count));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
                if ui.button("Optionen…").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                }
            });
        });
    });

    events
}
