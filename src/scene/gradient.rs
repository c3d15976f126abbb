//! Iteration-count colouring for escape-time fractals.

use crate::shapes::MandelbrotColored;
use crate::types::{Color, Point};

use super::PointColorer;

/// Cycle length used by the palette. Kept at the two-decimal value so the
/// palette reproduces existing renders.
const CYCLE: f64 = 6.28;

/// Colours points by how quickly they escape a [`MandelbrotColored`].
///
/// Escaped points cycle smoothly through a cosine palette indexed by the
/// iteration count; points that never escape are black.
#[derive(Debug, Clone)]
pub struct IterationPalette {
    fractal: MandelbrotColored,
    colors: Vec<Color>,
}

impl IterationPalette {
    pub fn new(fractal: MandelbrotColored) -> Self {
        let max = fractal.max_iterations;
        let colors = (0..max)
            .map(|i| {
                let t = i as f64 / max as f64;
                Color::new(
                    0.5 + 0.5 * (3.0 + t * CYCLE).cos(),
                    0.5 + 0.5 * (2.0 + t * CYCLE).cos(),
                    0.5 + 0.5 * (1.0 + t * CYCLE).cos(),
                )
            })
            .collect();

        Self { fractal, colors }
    }

    pub fn fractal(&self) -> &MandelbrotColored {
        &self.fractal
    }

    /// Palette entries, one per iteration count below the maximum.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl PointColorer for IterationPalette {
    fn color_at(&self, point: Point) -> Color {
        let n = self.fractal.iteration_count(point) as usize;
        self.colors.get(n).copied().unwrap_or(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_length() {
        let palette = IterationPalette::new(MandelbrotColored::new(80));
        assert_eq!(palette.colors().len(), 80);
    }

    #[test]
    fn test_first_entry() {
        let palette = IterationPalette::new(MandelbrotColored::new(10));
        let first = palette.colors()[0];
        assert_eq!(first.r, 0.5 + 0.5 * 3.0f64.cos());
        assert_eq!(first.g, 0.5 + 0.5 * 2.0f64.cos());
        assert_eq!(first.b, 0.5 + 0.5 * 1.0f64.cos());
    }

    #[test]
    fn test_cycle_is_nearly_periodic() {
        let palette = IterationPalette::new(MandelbrotColored::new(1000));
        let first = palette.colors()[0];
        let last = palette.colors()[999];
        assert!((first.r - last.r).abs() < 0.01);
    }

    #[test]
    fn test_members_are_black() {
        let palette = IterationPalette::new(MandelbrotColored::new(80));
        assert_eq!(palette.color_at(Point::ORIGIN), Color::BLACK);
        assert_eq!(palette.color_at(Point::new(-1.0, 0.0)), Color::BLACK);
    }

    #[test]
    fn test_escaped_points_use_iteration_entry() {
        let palette = IterationPalette::new(MandelbrotColored::new(80));
        // (2, 2) escapes on the first iteration
        assert_eq!(palette.color_at(Point::new(2.0, 2.0)), palette.colors()[0]);
    }
}
