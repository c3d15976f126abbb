//! Image driver: renders every pixel of a scene into a colour grid.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{RasterError, Result};
use crate::scene::Scene;
use crate::types::{Color, Window};

use super::filter::{FilterKind, DEFAULT_SD};
use super::rotation::Rotation;
use super::sampler::{Footprint, Sampler};

/// Everything needed to render a scene, independent of the scene itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Region of scene space to render.
    pub window: Window,

    /// Output width in pixels.
    pub width: u32,

    /// Output height in pixels.
    pub height: u32,

    /// Anti-aliasing filter.
    pub filter: FilterKind,

    /// Samples per pixel (ignored without a filter).
    pub samples: u32,

    /// Gaussian standard deviation in pixels.
    pub sd: f64,

    /// Counter-clockwise rotation of the rendered content, in degrees.
    pub rotation: f64,

    /// Base seed for jitter sampling. Drawn at random when unset.
    pub seed: Option<u64>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            window: Window::default(),
            width: 800,
            height: 600,
            filter: FilterKind::None,
            samples: 10,
            sd: DEFAULT_SD,
            rotation: 0.0,
            seed: None,
        }
    }
}

impl RenderSettings {
    /// Check the settings before any sampling starts.
    pub fn validate(&self) -> Result<()> {
        self.window.validate()?;

        if self.width == 0 || self.height == 0 {
            return Err(RasterError::InvalidArgument {
                message: format!("Invalid resolution {}x{}", self.width, self.height),
                help: Some("Width and height must be at least 1 pixel".to_string()),
            });
        }

        if self.filter != FilterKind::None && self.samples == 0 {
            return Err(RasterError::InvalidArgument {
                message: "Anti-aliasing needs at least one sample per pixel".to_string(),
                help: Some("Pass --samples 1 or more, or --filter none".to_string()),
            });
        }

        if !self.rotation.is_finite() {
            return Err(RasterError::invalid(format!(
                "Rotation must be finite, got {}",
                self.rotation
            )));
        }

        Ok(())
    }
}

/// A rendered image - rows of colours.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    /// Scene name.
    pub name: String,

    /// Pixel grid (pixels[j][i]); row 0 is the row nearest `ymin`.
    pixels: Vec<Vec<Color>>,

    width: usize,
    height: usize,
}

impl RenderedImage {
    /// Wrap a pixel grid (`pixels[j][i]`). Every row must have the same
    /// length.
    pub fn new(name: impl Into<String>, pixels: Vec<Vec<Color>>) -> Result<Self> {
        let width = pixels.first().map_or(0, |row| row.len());
        if let Some(j) = pixels.iter().position(|row| row.len() != width) {
            return Err(RasterError::InvalidArgument {
                message: format!(
                    "Row {} has {} pixels, expected {}",
                    j,
                    pixels[j].len(),
                    width
                ),
                help: Some("Every row of an image must have the same width".to_string()),
            });
        }
        Ok(Self::from_rows(name, pixels, width))
    }

    /// Rows produced by the renderer are all `width` long.
    fn from_rows(name: impl Into<String>, pixels: Vec<Vec<Color>>, width: usize) -> Self {
        Self {
            name: name.into(),
            height: pixels.len(),
            pixels,
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `i`, row `j` (row 0 at `ymin`).
    pub fn get(&self, i: usize, j: usize) -> Option<Color> {
        self.pixels.get(j).and_then(|row| row.get(i)).copied()
    }

    pub fn rows(&self) -> &[Vec<Color>] {
        &self.pixels
    }

    /// Flat `height x width x 3` buffer of channel values, row 0 first.
    pub fn to_buffer(&self) -> Vec<f64> {
        let mut buffer = Vec::with_capacity(self.width * self.height * 3);
        for row in &self.pixels {
            for color in row {
                buffer.extend_from_slice(&color.to_array());
            }
        }
        buffer
    }
}

/// Renders scenes with fixed settings.
#[derive(Debug, Clone)]
pub struct Renderer {
    settings: RenderSettings,
    sampler: Sampler,
    seed: u64,
}

impl Renderer {
    /// Validate settings and resolve the filter. Fails before any pixel is
    /// sampled.
    pub fn new(settings: RenderSettings) -> Result<Self> {
        settings.validate()?;

        let filter = settings.filter.kernel(settings.sd)?;
        let rotation = Rotation::view(settings.window.center(), settings.rotation);
        let sampler = Sampler::new(filter, settings.samples, rotation);
        let seed = settings.seed.unwrap_or_else(rand::random);

        Ok(Self {
            settings,
            sampler,
            seed,
        })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Base seed in use; pass it back in to reproduce a render.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn render(&self, scene: &Scene) -> RenderedImage {
        self.render_with(scene, |_| {})
    }

    /// Render, calling `on_row` with the number of finished rows each time
    /// a row completes. Under the `parallel` feature rows finish out of
    /// order and `on_row` runs on worker threads.
    pub fn render_with<F>(&self, scene: &Scene, on_row: F) -> RenderedImage
    where
        F: Fn(usize) + Sync,
    {
        let rows = self.settings.height;
        let finished = AtomicUsize::new(0);
        let row = |j: u32| {
            let pixels = self.render_row(scene, j);
            on_row(finished.fetch_add(1, Ordering::Relaxed) + 1);
            pixels
        };

        #[cfg(feature = "parallel")]
        let pixels = {
            use rayon::prelude::*;
            (0..rows).into_par_iter().map(row).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let pixels = (0..rows).map(row).collect();

        RenderedImage::from_rows(scene.name.clone(), pixels, self.settings.width as usize)
    }

    /// Each row samples from its own stream, so results do not depend on
    /// the order rows are rendered in.
    fn render_row(&self, scene: &Scene, j: u32) -> Vec<Color> {
        let RenderSettings {
            window,
            width,
            height,
            ..
        } = self.settings;
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(j as u64));

        (0..width)
            .map(|i| {
                let footprint = Footprint::for_pixel(&window, width, height, i, j);
                self.sampler.sample_pixel(scene, &footprint, &mut rng)
            })
            .collect()
    }
}
