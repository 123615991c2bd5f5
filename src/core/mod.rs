//! Core-Domänentypen: Bounds, Koordinaten-Mapping, Gesten, Regressions-Punkte.

pub mod bounds;
pub mod gesture;
pub mod mapper;
pub mod mode;
pub mod regression_set;

pub use bounds::{ScreenRect, ViewportBounds};
pub use gesture::Gesture;
pub use mapper::{CanvasLayout, CoordinateMapper, RawInput};
pub use mode::Mode;
pub use regression_set::{PointRejected, RegressionSet};
