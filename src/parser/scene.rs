//! Scene file parser.
//!
//! Parses `.scene.yaml` files into `Scene` instances. A file describes
//! either an ordered list of shapes or a single gradient colorer:
//!
//! ```yaml
//! name: mickey
//! background: "#FFFFFF"
//! window: [0, 8, 0, 6]
//! shapes:
//!   - kind: circle
//!     center: [4, 2.6]
//!     radius: 1.6
//!     color: "#000000"
//!   - kind: implicit
//!     terms: [[1, 2, 0], [1, 0, 2], [-1, 0, 0]]
//!     color: "#FF0000"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{RasterError, Result};
use crate::scene::{IterationPalette, Scene, SceneBuilder};
use crate::shapes::{
    Circle, ImplicitFunction, Mandelbrot, MandelbrotColored, Polygon, Polynomial, Shape, Term,
    Triangle, DEFAULT_ESCAPE_RADIUS,
};
use crate::types::{Color, Point, Window};

/// A parsed scene file.
#[derive(Debug)]
pub struct SceneDocument {
    pub scene: Scene,

    /// Window suggested by the file, if any.
    pub window: Option<Window>,
}

#[derive(Debug, Deserialize)]
struct RawScene {
    name: Option<String>,
    background: Option<String>,
    window: Option<Window>,
    #[serde(default)]
    shapes: Vec<RawLayer>,
    gradient: Option<RawGradient>,
}

#[derive(Debug, Deserialize)]
struct RawLayer {
    color: String,
    #[serde(flatten)]
    shape: RawShape,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawShape {
    Circle {
        center: [f64; 2],
        radius: f64,
    },
    Triangle {
        vertices: [[f64; 2]; 3],
    },
    Polygon {
        vertices: Vec<[f64; 2]>,
    },
    Implicit {
        terms: Vec<(f64, u32, u32)>,
    },
    Mandelbrot {
        max_iterations: u32,
        #[serde(default = "default_escape_radius")]
        escape_radius: f64,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawGradient {
    Mandelbrot {
        max_iterations: u32,
        #[serde(default = "default_escape_radius")]
        escape_radius: f64,
    },
}

fn default_escape_radius() -> f64 {
    DEFAULT_ESCAPE_RADIUS
}

/// Load and parse a scene file. The file stem names the scene when the
/// file does not.
pub fn load_scene_file(path: &Path) -> Result<SceneDocument> {
    let source = fs::read_to_string(path).map_err(|e| RasterError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read scene file: {}", e),
    })?;

    let fallback = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.split('.').next().unwrap_or(n))
        .unwrap_or("scene");

    parse_scene_named(&source, fallback)
}

/// Parse a scene from YAML source.
pub fn parse_scene_file(source: &str) -> Result<SceneDocument> {
    parse_scene_named(source, "untitled")
}

fn parse_scene_named(source: &str, fallback_name: &str) -> Result<SceneDocument> {
    let raw: RawScene = serde_yaml::from_str(source).map_err(|e| RasterError::Parse {
        message: format!("Invalid scene file: {}", e),
        help: Some("Each shape needs a `kind`, its geometry, and a `color`".to_string()),
    })?;

    let name = raw.name.unwrap_or_else(|| fallback_name.to_string());
    let mut builder = SceneBuilder::new(name.clone());

    if let Some(background) = &raw.background {
        builder.background(Color::from_hex(background)?);
    }

    for (index, layer) in raw.shapes.into_iter().enumerate() {
        let color = Color::from_hex(&layer.color)?;
        let shape = convert_shape(layer.shape).map_err(|e| {
            let help = match &e {
                RasterError::InvalidArgument { help, .. } => help.clone(),
                _ => None,
            };
            RasterError::Parse {
                message: format!("Shape {} in scene '{}': {}", index + 1, name, e),
                help,
            }
        })?;
        builder.layer(shape, color);
    }

    if let Some(gradient) = raw.gradient {
        match gradient {
            RawGradient::Mandelbrot {
                max_iterations,
                escape_radius,
            } => {
                check_fractal(max_iterations, escape_radius).map_err(|message| {
                    RasterError::Parse {
                        message: format!("Gradient in scene '{}': {}", name, message),
                        help: Some(FRACTAL_HELP.to_string()),
                    }
                })?;
                let fractal = MandelbrotColored::with_radius(max_iterations, escape_radius);
                builder.gradient(IterationPalette::new(fractal));
            }
        }
    }

    let scene = builder.build().map_err(|e| RasterError::Parse {
        message: e.to_string(),
        help: Some("Use either `shapes` or `gradient`, not both".to_string()),
    })?;

    Ok(SceneDocument {
        scene,
        window: raw.window,
    })
}

const FRACTAL_HELP: &str = "Use max_iterations >= 1 and a positive, finite escape_radius";

/// Fractal parameters must iterate at least once and escape at a real radius.
fn check_fractal(max_iterations: u32, escape_radius: f64) -> std::result::Result<(), String> {
    if max_iterations == 0 {
        return Err("max_iterations must be at least 1".to_string());
    }
    if !(escape_radius.is_finite() && escape_radius > 0.0) {
        return Err(format!(
            "escape_radius must be positive and finite, got {}",
            escape_radius
        ));
    }
    Ok(())
}

fn convert_shape(raw: RawShape) -> Result<Shape> {
    let shape: Shape = match raw {
        RawShape::Circle { center, radius } => Circle::new(center, radius).into(),
        RawShape::Triangle { vertices: [a, b, c] } => Triangle::new(a, b, c).into(),
        RawShape::Polygon { vertices } => {
            Polygon::new(vertices.into_iter().map(Point::from).collect())?.into()
        }
        RawShape::Implicit { terms } => {
            let terms = terms
                .into_iter()
                .map(|(coeff, x_pow, y_pow)| Term::new(coeff, x_pow, y_pow))
                .collect();
            ImplicitFunction::polynomial(Polynomial::new(terms)).into()
        }
        RawShape::Mandelbrot {
            max_iterations,
            escape_radius,
        } => {
            check_fractal(max_iterations, escape_radius).map_err(|message| {
                RasterError::InvalidArgument {
                    message,
                    help: Some(FRACTAL_HELP.to_string()),
                }
            })?;
            Mandelbrot::new(max_iterations, escape_radius).into()
        }
    };
    Ok(shape)
}
