//! World-space windows.

use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};

use super::Point;

/// The rectangle of scene space mapped onto the output image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Window {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Window {
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Geometric centre of the window.
    pub fn center(&self) -> Point {
        Point::new(
            (self.xmin + self.xmax) / 2.0,
            (self.ymin + self.ymax) / 2.0,
        )
    }

    /// Check that both extents are finite and positive.
    pub fn validate(&self) -> Result<()> {
        let finite = [self.xmin, self.xmax, self.ymin, self.ymax]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.width() <= 0.0 || self.height() <= 0.0 {
            return Err(RasterError::InvalidArgument {
                message: format!(
                    "Invalid window [{}, {}] x [{}, {}]",
                    self.xmin, self.xmax, self.ymin, self.ymax
                ),
                help: Some("Window is xmin xmax ymin ymax with xmin < xmax and ymin < ymax".to_string()),
            });
        }
        Ok(())
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(0.0, 8.0, 0.0, 6.0)
    }
}

impl From<[f64; 4]> for Window {
    fn from([xmin, xmax, ymin, ymax]: [f64; 4]) -> Self {
        Self::new(xmin, xmax, ymin, ymax)
    }
}

impl From<Window> for [f64; 4] {
    fn from(w: Window) -> Self {
        [w.xmin, w.xmax, w.ymin, w.ymax]
    }
}
