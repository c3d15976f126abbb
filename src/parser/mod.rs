//! Parsers for raster definition files.
//!
//! Scene files are YAML documents listing shapes in drawing order, or a
//! single gradient colorer. See [`scene`] for the format.
//!
//! # Usage
//!
//! ```ignore
//! use raster::parser::load_scene_file;
//!
//! let doc = load_scene_file(Path::new("scenes/rings.scene.yaml"))?;
//! println!("Loaded: {}", doc.scene.name);
//! ```

pub mod scene;

pub use scene::{load_scene_file, parse_scene_file, SceneDocument};
