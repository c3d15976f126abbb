//! Escape-time Mandelbrot shapes.
//!
//! Iterates `z <- z^2 + c` from `z = 0` with `c` the sample point. A point
//! escapes at the first iteration where `|z|^2` exceeds the squared escape
//! radius.

use crate::types::Point;

/// Default escape radius.
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

/// Iteration index at which `c` escapes, or `None` if it survives
/// `max_iterations` steps.
fn escape_time(c: Point, max_iterations: u32, escape_radius: f64) -> Option<u32> {
    let bound = escape_radius * escape_radius;
    let (mut zx, mut zy) = (0.0f64, 0.0f64);

    for i in 0..max_iterations {
        let next_x = zx * zx - zy * zy + c.x;
        zy = 2.0 * zx * zy + c.y;
        zx = next_x;

        if zx * zx + zy * zy > bound {
            return Some(i);
        }
    }

    None
}

/// Mandelbrot set membership.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mandelbrot {
    pub max_iterations: u32,
    pub escape_radius: f64,
}

impl Mandelbrot {
    pub fn new(max_iterations: u32, escape_radius: f64) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
            escape_radius,
        }
    }

    pub fn in_out(&self, point: Point) -> bool {
        escape_time(point, self.max_iterations, self.escape_radius).is_none()
    }
}

/// Mandelbrot whose signal is the iteration count rather than membership.
///
/// `in_out` is true everywhere; colouring is layered on top via
/// [`MandelbrotColored::iteration_count`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotColored {
    pub max_iterations: u32,
    pub escape_radius: f64,
}

impl MandelbrotColored {
    pub fn new(max_iterations: u32) -> Self {
        Self::with_radius(max_iterations, DEFAULT_ESCAPE_RADIUS)
    }

    pub fn with_radius(max_iterations: u32, escape_radius: f64) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
            escape_radius,
        }
    }

    pub fn in_out(&self, _point: Point) -> bool {
        true
    }

    /// Iteration at which the point diverged, in `[0, max_iterations]`.
    /// Returns `max_iterations` for points that never diverge.
    pub fn iteration_count(&self, point: Point) -> u32 {
        escape_time(point, self.max_iterations, self.escape_radius).unwrap_or(self.max_iterations)
    }

    /// The membership shape with identical parameters.
    pub fn membership(&self) -> Mandelbrot {
        Mandelbrot::new(self.max_iterations, self.escape_radius)
    }
}
