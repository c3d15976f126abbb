use crate::types::Point;

/// A filled disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: impl Into<Point>, radius: f64) -> Self {
        Self {
            center: center.into(),
            radius,
        }
    }

    /// Boundary-inclusive containment, compared in squared distance.
    pub fn in_out(&self, point: Point) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Circle {
        Circle::new((0.0, 0.0), 1.0)
    }

    #[test]
    fn test_inside() {
        let c = unit();
        assert!(c.in_out(Point::ORIGIN));
        assert!(c.in_out(Point::new(0.5, -0.5)));
        assert!(c.in_out(Point::new(0.0, 0.999)));
    }

    #[test]
    fn test_outside() {
        let c = unit();
        assert!(!c.in_out(Point::new(1.0, 0.001)));
        assert!(!c.in_out(Point::new(-0.8, 0.8)));
        assert!(!c.in_out(Point::new(5.0, 0.0)));
    }

    #[test]
    fn test_boundary_inclusive() {
        let c = unit();
        assert!(c.in_out(Point::new(1.0, 0.0)));
        assert!(c.in_out(Point::new(0.0, -1.0)));
        assert!(c.in_out(Point::new(0.6, 0.8)));
    }

    #[test]
    fn test_offset_center() {
        let c = Circle::new((1.0, 1.0), 0.5);
        assert!(c.in_out(Point::new(1.25, 1.25)));
        assert!(!c.in_out(Point::new(0.5, 0.5)));
    }
}
