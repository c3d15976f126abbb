//! Scenes and per-point colour resolution.
//!
//! A scene is either an ordered list of `(Shape, Color)` layers drawn over a
//! background, or a gradient scene whose colour comes from a
//! [`PointColorer`] for every point. Which one is fixed when the scene is
//! built.

mod builtin;
mod gradient;

pub use builtin::{BuiltinScenes, SceneInfo};
pub use gradient::IterationPalette;

use std::fmt;

use crate::error::{RasterError, Result};
use crate::shapes::Shape;
use crate::types::{Color, Point};

/// Colours every point of a gradient scene.
pub trait PointColorer: Send + Sync {
    fn color_at(&self, point: Point) -> Color;
}

impl<F> PointColorer for F
where
    F: Fn(Point) -> Color + Send + Sync,
{
    fn color_at(&self, point: Point) -> Color {
        self(point)
    }
}

/// A shape and the colour it paints.
#[derive(Debug, Clone)]
pub struct Layer {
    pub shape: Shape,
    pub color: Color,
}

/// How a scene resolves colours.
pub enum SceneContent {
    /// First layer containing the point wins; background otherwise.
    Layers(Vec<Layer>),

    /// The colorer decides every point.
    Gradient(Box<dyn PointColorer>),
}

impl fmt::Debug for SceneContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneContent::Layers(layers) => f.debug_tuple("Layers").field(layers).finish(),
            SceneContent::Gradient(_) => f.write_str("Gradient(..)"),
        }
    }
}

/// An immutable scene, built once before rendering.
#[derive(Debug)]
pub struct Scene {
    /// Scene name.
    pub name: String,

    /// Colour for points outside every layer.
    pub background: Color,

    content: SceneContent,
}

impl Scene {
    /// Resolve the colour at a point.
    pub fn color_at(&self, point: Point) -> Color {
        match &self.content {
            SceneContent::Gradient(colorer) => colorer.color_at(point),
            SceneContent::Layers(layers) => layers
                .iter()
                .find(|layer| layer.shape.in_out(point))
                .map_or(self.background, |layer| layer.color),
        }
    }

    /// Layers in drawing order (empty for gradient scenes).
    pub fn layers(&self) -> &[Layer] {
        match &self.content {
            SceneContent::Layers(layers) => layers,
            SceneContent::Gradient(_) => &[],
        }
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self.content, SceneContent::Gradient(_))
    }

    pub fn content(&self) -> &SceneContent {
        &self.content
    }
}

/// Builder for scenes.
pub struct SceneBuilder {
    name: String,
    background: Color,
    layers: Vec<Layer>,
    gradient: Option<Box<dyn PointColorer>>,
}

impl SceneBuilder {
    /// Create a builder with a white background.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: Color::WHITE,
            layers: Vec::new(),
            gradient: None,
        }
    }

    /// Set the background colour.
    pub fn background(&mut self, color: Color) -> &mut Self {
        self.background = color;
        self
    }

    /// Append a layer. Earlier layers take precedence.
    pub fn layer(&mut self, shape: impl Into<Shape>, color: Color) -> &mut Self {
        self.layers.push(Layer {
            shape: shape.into(),
            color,
        });
        self
    }

    /// Make this a gradient scene coloured by `colorer`.
    pub fn gradient(&mut self, colorer: impl PointColorer + 'static) -> &mut Self {
        self.gradient = Some(Box::new(colorer));
        self
    }

    /// Build the scene.
    pub fn build(self) -> Result<Scene> {
        let content = match self.gradient {
            Some(_) if !self.layers.is_empty() => {
                return Err(RasterError::InvalidArgument {
                    message: format!(
                        "Scene '{}' has both layers and a gradient colorer",
                        self.name
                    ),
                    help: Some("A gradient scene colours every point; remove the layers".to_string()),
                });
            }
            Some(colorer) => SceneContent::Gradient(colorer),
            None => SceneContent::Layers(self.layers),
        };

        Ok(Scene {
            name: self.name,
            background: self.background,
            content,
        })
    }
}
