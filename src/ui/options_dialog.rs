//! Optionen-Dialog für Zeichenbereich, Abtastung, Farben und Breiten.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Zeichenbereich ──────────────────────────────────
            ui.collapsing("Zeichenbereich", |ui| {
                ui.horizontal(|ui| {
                    ui.label("X von/bis:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.bounds.min_x).speed(0.5))
                        .changed();
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.bounds.max_x).speed(0.5))
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Y von/bis:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.bounds.min_y).speed(0.5))
                        .changed();
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.bounds.max_y).speed(0.5))
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Flächenanteil:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.canvas_fill_ratio)
                                .range(0.2..=1.0)
                                .speed(0.01),
                        )
                        .changed();
                });
                changed |= ui.checkbox(&mut opts.grid_visible, "Gitter anzeigen").changed();
            });

            // ── Kurven ──────────────────────────────────────────
            ui.collapsing("Kurven", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Parabel-Schrittweite:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.parabola_sample_step)
                                .range(0.01..=1.0)
                                .speed(0.005),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Breite Skizze:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.sketch_width_logical)
                                .range(0.01..=2.0)
                                .speed(0.01),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Breite Kurve:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.curve_width_logical)
                                .range(0.01..=2.0)
                                .speed(0.01),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Skizze:", &mut opts.sketch_color);
                changed |= color_edit(ui, "Kurve:", &mut opts.curve_color);
            });

            // ── Punkte ──────────────────────────────────────────
            ui.collapsing("Punkte", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Radius (px):");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.point_radius_px)
                                .range(1.0..=20.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Farbe:", &mut opts.point_color);
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::OptionsResetRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed && opts.is_valid() {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
