//! UI-Layer mit egui: Toolbar, Zeichenfläche, Statuszeile, Optionen-Dialog.
//!
//! Die UI liest den `AppState` nur und liefert `AppIntent`s zurück;
//! Mutationen laufen ausschließlich über den Controller.

pub mod canvas;
pub mod input;
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use canvas::{paint_canvas, screen_rect_from};
pub use input::InputState;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
