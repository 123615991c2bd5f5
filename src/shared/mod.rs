//! Geteilte Typen zwischen App-, Render- und UI-Layer.

pub mod options;
mod render_scene;

pub use options::SketchOptions;
pub use render_scene::RenderScene;
