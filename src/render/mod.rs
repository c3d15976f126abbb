//! Rendering module for raster.
//!
//! Filters, view rotation and per-pixel sampling, plus the driver that turns
//! a scene into an image and the PNG sink.

mod filter;
mod png;
mod raster;
mod rotation;
mod sampler;

pub use filter::{Filter, FilterKind, DEFAULT_SD};
pub use png::{to_rgb_image, write_png};
pub use raster::{RenderSettings, RenderedImage, Renderer};
pub use rotation::Rotation;
pub use sampler::{composite, Accumulator, Footprint, Sampler};
