//! Sketch-Fit.
//!
//! Freihand-Skizzen werden als Gerade, Parabel oder Regressionsgerade
//! erkannt, auf den Zeichenbereich geclippt und als Gleichung angezeigt.

use eframe::egui;
use sketch_fit::core::{CanvasLayout, ScreenRect};
use sketch_fit::{ui, AppController, AppIntent, AppState, SketchOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Sketch-Fit v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([900.0, 900.0])
                .with_title("Sketch-Fit"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Sketch-Fit",
            options,
            Box::new(|_cc| Ok(Box::new(SketchApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SketchApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl SketchApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SketchOptions::config_path();
        let sketch_options = SketchOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(sketch_options, config_path),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events || self.input.contact_active() {
            ctx.request_repaint();
        }
    }
}

impl SketchApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default().show(ctx, |panel| {
            let available = ui::screen_rect_from(panel.max_rect());
            let square = CanvasLayout::fit_square(available, self.state.options.canvas_fill_ratio);
            let rect = to_egui_rect(square);

            // Zeichenfläche reservieren
            let _response = panel.allocate_rect(rect, egui::Sense::click_and_drag());

            events.extend(self.input.collect_canvas_events(panel, rect, square));

            let scene = self.controller.build_render_scene(&self.state);
            ui::paint_canvas(panel.painter(), rect, &scene);
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{:#}", e));
            }
        }
    }
}

fn to_egui_rect(rect: ScreenRect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.min.x as f32, rect.min.y as f32),
        egui::vec2(rect.size.x as f32, rect.size.y as f32),
    )
}
