//! raster - 2D scene rasterizer
//!
//! A library for rendering ordered shape lists and escape-time fractals into
//! RGB images, with optional stochastic anti-aliasing and view rotation.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod render;
pub mod scene;
pub mod shapes;
pub mod types;

pub use error::{RasterError, Result};
pub use manifest::Manifest;
pub use parser::{load_scene_file, parse_scene_file, SceneDocument};
pub use render::{
    composite, to_rgb_image, write_png, Filter, FilterKind, Footprint, RenderSettings,
    RenderedImage, Renderer, Rotation, Sampler,
};
pub use scene::{
    BuiltinScenes, IterationPalette, Layer, PointColorer, Scene, SceneBuilder, SceneContent,
    SceneInfo,
};
pub use shapes::{
    Circle, ImplicitFunction, Mandelbrot, MandelbrotColored, Polygon, Polynomial, Shape, Term,
    Triangle,
};
pub use types::{Color, Point, Window};
