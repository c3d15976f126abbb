//! Straight-edged shapes: triangles and convex polygons.
//!
//! Both use the same-side test: for every directed edge, the cross product
//! of the edge with the vector from the edge's start to the point has the
//! same sign. Accepting either sign makes the test independent of winding
//! order, and zero counts as inside so edges are boundary-inclusive.

use crate::error::{RasterError, Result};
use crate::types::Point;

/// A triangle given by three vertices in either winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v1: Point,
    pub v2: Point,
    pub v3: Point,
}

impl Triangle {
    pub fn new(v1: impl Into<Point>, v2: impl Into<Point>, v3: impl Into<Point>) -> Self {
        Self {
            v1: v1.into(),
            v2: v2.into(),
            v3: v3.into(),
        }
    }

    pub fn in_out(&self, point: Point) -> bool {
        let c1 = edge_cross(self.v1, self.v2, point);
        let c2 = edge_cross(self.v2, self.v3, point);
        let c3 = edge_cross(self.v3, self.v1, point);

        (c1 >= 0.0 && c2 >= 0.0 && c3 >= 0.0) || (c1 <= 0.0 && c2 <= 0.0 && c3 <= 0.0)
    }

    /// The same triangle with reversed winding.
    pub fn reversed(&self) -> Self {
        Self {
            v1: self.v3,
            v2: self.v2,
            v3: self.v1,
        }
    }
}

/// A convex polygon with at least three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon. Vertices must describe a convex, non-degenerate
    /// outline in either winding order.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(RasterError::InvalidArgument {
                message: format!("Polygon needs at least 3 vertices, got {}", vertices.len()),
                help: Some("Use a circle or remove the shape".to_string()),
            });
        }
        if !is_convex(&vertices) {
            return Err(RasterError::InvalidArgument {
                message: "Polygon outline is not convex".to_string(),
                help: Some(
                    "Split concave or self-intersecting outlines into convex polygons or triangles"
                        .to_string(),
                ),
            });
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn in_out(&self, point: Point) -> bool {
        let n = self.vertices.len();
        let mut any_positive = false;
        let mut any_negative = false;

        for i in 0..n {
            let cross = edge_cross(self.vertices[i], self.vertices[(i + 1) % n], point);
            if cross > 0.0 {
                any_positive = true;
            } else if cross < 0.0 {
                any_negative = true;
            }
            if any_positive && any_negative {
                return false;
            }
        }

        true
    }
}

impl From<Triangle> for Polygon {
    fn from(t: Triangle) -> Self {
        Self {
            vertices: vec![t.v1, t.v2, t.v3],
        }
    }
}

/// Every turn between consecutive edges goes the same way (collinear turns
/// are skipped) and the outline turns through exactly one full circle.
fn is_convex(vertices: &[Point]) -> bool {
    let n = vertices.len();
    let mut any_positive = false;
    let mut any_negative = false;
    let mut turning = 0.0;

    for i in 0..n {
        let incoming = vertices[(i + 1) % n] - vertices[i];
        let outgoing = vertices[(i + 2) % n] - vertices[(i + 1) % n];
        let cross = incoming.cross(outgoing);
        if cross > 0.0 {
            any_positive = true;
        } else if cross < 0.0 {
            any_negative = true;
        }
        if any_positive && any_negative {
            return false;
        }
        let dot = incoming.x * outgoing.x + incoming.y * outgoing.y;
        turning += cross.atan2(dot);
    }

    // All-collinear outlines have no turn and enclose nothing
    (any_positive || any_negative) && (turning.abs() - std::f64::consts::TAU).abs() < 1e-6
}

/// Cross product of edge `a -> b` with the vector `a -> point`.
fn edge_cross(a: Point, b: Point, point: Point) -> f64 {
    (b - a).cross(point - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ccw() -> Triangle {
        Triangle::new((0.0, 0.0), (4.0, 0.0), (0.0, 4.0))
    }

    #[test]
    fn test_triangle_inside_outside() {
        let t = ccw();
        assert!(t.in_out(Point::new(1.0, 1.0)));
        assert!(!t.in_out(Point::new(3.0, 3.0)));
        assert!(!t.in_out(Point::new(-0.1, 1.0)));
    }

    #[test]
    fn test_triangle_boundary_inclusive() {
        let t = ccw();
        assert!(t.in_out(Point::new(2.0, 0.0)));
        assert!(t.in_out(Point::new(2.0, 2.0)));
        assert!(t.in_out(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_triangle_winding_agnostic() {
        let t = ccw();
        let r = t.reversed();
        let probes = [
            Point::new(1.0, 1.0),
            Point::new(3.0, 3.0),
            Point::new(0.0, 2.0),
            Point::new(-1.0, -1.0),
            Point::new(0.5, 3.4),
            Point::new(3.9, 0.05),
        ];
        for p in probes {
            assert_eq!(t.in_out(p), r.in_out(p), "mismatch at {:?}", p);
        }
        assert!(r.in_out(Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_polygon_square() {
        let square = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ])
        .unwrap();
        assert!(square.in_out(Point::new(1.0, 1.0)));
        assert!(square.in_out(Point::new(2.0, 1.0)));
        assert!(!square.in_out(Point::new(2.5, 1.0)));
    }

    #[test]
    fn test_polygon_matches_triangle() {
        let t = ccw();
        let p = Polygon::from(t);
        for probe in [Point::new(1.0, 1.0), Point::new(3.0, 3.0), Point::new(2.0, 2.0)] {
            assert_eq!(p.in_out(probe), t.in_out(probe));
        }
    }

    #[test]
    fn test_polygon_rejects_concave_outline() {
        // L shape: the corner at (1, 1) turns the other way
        let result = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(0.0, 2.0),
        ]);
        assert!(matches!(result, Err(RasterError::InvalidArgument { .. })));
    }

    #[test]
    fn test_polygon_rejects_self_intersecting_star() {
        let star = (0..5)
            .map(|k| {
                let angle = std::f64::consts::TAU * (2 * k) as f64 / 5.0;
                Point::new(angle.cos(), angle.sin())
            })
            .collect();
        assert!(Polygon::new(star).is_err());
    }

    #[test]
    fn test_polygon_rejects_collinear_vertices() {
        let result = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_polygon_accepts_either_winding_and_collinear_edge_points() {
        let ccw = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        let mut cw = ccw.clone();
        cw.reverse();
        assert!(Polygon::new(ccw).is_ok());
        assert!(Polygon::new(cw).is_ok());
    }

    #[test]
    fn test_polygon_too_few_vertices() {
        let result = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert!(matches!(result, Err(RasterError::InvalidArgument { .. })));
    }
}
