//! Per-pixel sampling and compositing.
//!
//! Without a filter a pixel takes the colour at its centre. With a filter,
//! `samples` jittered points are drawn uniformly over the pixel footprint,
//! each weighted by the kernel at its offset in pixel fractions, and the
//! pixel is their weighted average. If the weights sum to zero or less the
//! pixel falls back to its centre colour.

use rand::Rng;

use crate::scene::Scene;
use crate::types::{Color, Point, Window};

use super::filter::Filter;
use super::rotation::Rotation;

/// Centre and extents of one pixel in scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    /// Footprint of pixel `(i, j)` in a `columns x rows` grid over `window`.
    /// Row 0 is the row nearest `ymin`.
    pub fn for_pixel(window: &Window, columns: u32, rows: u32, i: u32, j: u32) -> Self {
        let width = window.width() / columns as f64;
        let height = window.height() / rows as f64;
        Self {
            center: Point::new(
                window.xmin + window.width() * (i as f64 + 0.5) / columns as f64,
                window.ymin + window.height() * (j as f64 + 0.5) / rows as f64,
            ),
            width,
            height,
        }
    }

    /// Point at `(u, v)` pixel fractions from the centre.
    pub fn offset(&self, u: f64, v: f64) -> Point {
        Point::new(self.center.x + u * self.width, self.center.y + v * self.height)
    }
}

/// Running sums for the weighted-average law.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulator {
    weighted: Color,
    total: f64,
}

impl Accumulator {
    pub fn add(&mut self, color: Color, weight: f64) {
        self.weighted = self.weighted.add(color.scale(weight));
        self.total += weight;
    }

    pub fn total_weight(&self) -> f64 {
        self.total
    }

    /// `sum(w * c) / sum(w)`, or `None` when the weights sum to zero or less.
    pub fn finish(&self) -> Option<Color> {
        if self.total > 0.0 {
            Some(self.weighted.scale(1.0 / self.total))
        } else {
            None
        }
    }
}

/// Weighted average of `(color, weight)` samples.
pub fn composite(samples: &[(Color, f64)]) -> Option<Color> {
    let mut acc = Accumulator::default();
    for &(color, weight) in samples {
        acc.add(color, weight);
    }
    acc.finish()
}

/// Resolves one output colour per pixel.
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    filter: Option<Filter>,
    samples: u32,
    rotation: Rotation,
}

impl Sampler {
    pub fn new(filter: Option<Filter>, samples: u32, rotation: Rotation) -> Self {
        Self {
            filter,
            samples: samples.max(1),
            rotation,
        }
    }

    pub fn filter(&self) -> Option<Filter> {
        self.filter
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Map a sample point into scene space. Every sampling path goes
    /// through here so the rotation sign is shared.
    pub fn world_point(&self, point: Point) -> Point {
        self.rotation.apply(point)
    }

    /// Colour at the pixel centre.
    pub fn center_color(&self, scene: &Scene, footprint: &Footprint) -> Color {
        scene.color_at(self.world_point(footprint.center))
    }

    pub fn sample_pixel<R: Rng + ?Sized>(
        &self,
        scene: &Scene,
        footprint: &Footprint,
        rng: &mut R,
    ) -> Color {
        let Some(filter) = self.filter else {
            return self.center_color(scene, footprint);
        };

        let mut acc = Accumulator::default();
        for _ in 0..self.samples {
            let u = rng.gen::<f64>() - 0.5;
            let v = rng.gen::<f64>() - 0.5;
            let point = self.world_point(footprint.offset(u, v));
            acc.add(scene.color_at(point), filter.weight(u, v));
        }

        acc.finish()
            .unwrap_or_else(|| self.center_color(scene, footprint))
            .clamp()
    }
}
