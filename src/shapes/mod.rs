//! Shape variants and the uniform containment test.
//!
//! Every shape answers `in_out(point)`: a pure, boundary-inclusive
//! containment predicate. The set of kinds is closed; scenes hold `Shape`
//! values and dispatch through a single match.

mod circle;
mod implicit;
mod mandelbrot;
mod polygon;

pub use circle::Circle;
pub use implicit::{Field, ImplicitFunction, Polynomial, Term};
pub use mandelbrot::{Mandelbrot, MandelbrotColored, DEFAULT_ESCAPE_RADIUS};
pub use polygon::{Polygon, Triangle};

use crate::types::Point;

/// Any shape a scene can contain.
#[derive(Debug, Clone)]
pub enum Shape {
    Circle(Circle),
    Triangle(Triangle),
    Polygon(Polygon),
    Implicit(ImplicitFunction),
    Mandelbrot(Mandelbrot),
    MandelbrotColored(MandelbrotColored),
}

impl Shape {
    /// Whether `point` lies inside the shape (boundary inclusive).
    pub fn in_out(&self, point: Point) -> bool {
        match self {
            Shape::Circle(s) => s.in_out(point),
            Shape::Triangle(s) => s.in_out(point),
            Shape::Polygon(s) => s.in_out(point),
            Shape::Implicit(s) => s.in_out(point),
            Shape::Mandelbrot(s) => s.in_out(point),
            Shape::MandelbrotColored(s) => s.in_out(point),
        }
    }

    /// Kind tag, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Triangle(_) => "triangle",
            Shape::Polygon(_) => "polygon",
            Shape::Implicit(_) => "implicit_function",
            Shape::Mandelbrot(_) => "mandelbrot",
            Shape::MandelbrotColored(_) => "mandelbrot_colored",
        }
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Shape::Triangle(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Shape::Polygon(s)
    }
}

impl From<ImplicitFunction> for Shape {
    fn from(s: ImplicitFunction) -> Self {
        Shape::Implicit(s)
    }
}

impl From<Mandelbrot> for Shape {
    fn from(s: Mandelbrot) -> Self {
        Shape::Mandelbrot(s)
    }
}

impl From<MandelbrotColored> for Shape {
    fn from(s: MandelbrotColored) -> Self {
        Shape::MandelbrotColored(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        let shapes: Vec<Shape> = vec![
            Circle::new((0.0, 0.0), 1.0).into(),
            Triangle::new((-1.0, -1.0), (1.0, -1.0), (0.0, 1.0)).into(),
            ImplicitFunction::new(|p| p.x.abs() + p.y.abs() - 1.0).into(),
            Mandelbrot::new(50, 2.0).into(),
            MandelbrotColored::new(50).into(),
        ];
        for shape in &shapes {
            assert!(shape.in_out(Point::ORIGIN), "{} should contain origin", shape.kind());
        }
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(Shape::from(Circle::new((0.0, 0.0), 1.0)).kind(), "circle");
        assert_eq!(Shape::from(MandelbrotColored::new(10)).kind(), "mandelbrot_colored");
        assert_eq!(
            Shape::from(ImplicitFunction::new(|_| 0.0)).kind(),
            "implicit_function"
        );
    }

    #[test]
    fn test_deterministic() {
        let shape: Shape = Mandelbrot::new(100, 2.0).into();
        let p = Point::new(-0.75, 0.1);
        let first = shape.in_out(p);
        for _ in 0..10 {
            assert_eq!(shape.in_out(p), first);
        }
    }
}
