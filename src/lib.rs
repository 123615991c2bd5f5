//! Sketch-Fit Library.
//! Kurven-Erkennung und begrenztes Rendering als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod fit;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SessionState, UiState};
pub use core::{
    CanvasLayout, CoordinateMapper, Gesture, Mode, RawInput, RegressionSet, ScreenRect,
    ViewportBounds,
};
pub use fit::{CurveModel, FitError, FitRequest, LinearModel, QuadraticModel};
pub use render::{render_model, RenderedCurve};
pub use shared::{RenderScene, SketchOptions};
