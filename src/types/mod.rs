//! Core value types for raster.
//!
//! - `Point` - scene-space coordinates
//! - `Color` - linear RGB values in [0, 1] (unclamped until output)
//! - `Window` - the region of scene space being rendered

mod color;
mod point;
mod window;

pub use color::Color;
pub use point::Point;
pub use window::Window;
