//! Rigid rotation of sample points about the window centre.

use crate::types::Point;

/// A rotation about a fixed centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    center: Point,
    cos: f64,
    sin: f64,
}

impl Rotation {
    /// Rotate points counter-clockwise by `degrees` about `center`.
    pub fn new(center: Point, degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Self {
            center,
            cos: radians.cos(),
            sin: radians.sin(),
        }
    }

    pub fn identity() -> Self {
        Self {
            center: Point::ORIGIN,
            cos: 1.0,
            sin: 0.0,
        }
    }

    /// The sample-space transform that shows content rotated
    /// counter-clockwise by `degrees`.
    ///
    /// Points are rotated before the containment test, so the view
    /// rotation is the inverse of the content rotation.
    pub fn view(center: Point, degrees: f64) -> Self {
        Self::new(center, -degrees)
    }

    pub fn inverse(&self) -> Self {
        Self {
            center: self.center,
            cos: self.cos,
            sin: -self.sin,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.sin == 0.0 && self.cos == 1.0
    }

    pub fn apply(&self, point: Point) -> Point {
        if self.is_identity() {
            return point;
        }
        let d = point - self.center;
        self.center + Point::new(d.x * self.cos - d.y * self.sin, d.x * self.sin + d.y * self.cos)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}
