//! Shapes defined by a scalar field: inside wherever the field is ≤ 0.

use std::fmt;
use std::sync::Arc;

use crate::types::Point;

/// Scalar field signature accepted by [`ImplicitFunction`].
pub type Field = dyn Fn(Point) -> f64 + Send + Sync;

/// A shape bounded by the zero level set of a caller-supplied field.
///
/// A NaN field value compares false against zero, so such points are
/// outside. A panicking field aborts the render.
#[derive(Clone)]
pub struct ImplicitFunction {
    field: Arc<Field>,
}

impl ImplicitFunction {
    pub fn new(field: impl Fn(Point) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            field: Arc::new(field),
        }
    }

    /// An implicit shape bounded by a bivariate polynomial.
    pub fn polynomial(poly: Polynomial) -> Self {
        Self::new(move |p| poly.eval(p))
    }

    /// Evaluate the field.
    pub fn value(&self, point: Point) -> f64 {
        (self.field)(point)
    }

    pub fn in_out(&self, point: Point) -> bool {
        self.value(point) <= 0.0
    }
}

impl fmt::Debug for ImplicitFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplicitFunction").finish_non_exhaustive()
    }
}

/// One `coeff * x^x_pow * y^y_pow` term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coeff: f64,
    pub x_pow: u32,
    pub y_pow: u32,
}

impl Term {
    pub const fn new(coeff: f64, x_pow: u32, y_pow: u32) -> Self {
        Self { coeff, x_pow, y_pow }
    }
}

/// A bivariate polynomial as a sum of terms.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Total degree (0 for the empty polynomial).
    pub fn degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|t| t.x_pow + t.y_pow)
            .max()
            .unwrap_or(0)
    }

    pub fn eval(&self, p: Point) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coeff * p.x.powi(t.x_pow as i32) * p.y.powi(t.y_pow as i32))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_field() {
        let disc = ImplicitFunction::new(|p| p.x * p.x + p.y * p.y - 1.0);
        assert!(disc.in_out(Point::ORIGIN));
        assert!(disc.in_out(Point::new(1.0, 0.0)));
        assert!(!disc.in_out(Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_nan_is_outside() {
        let f = ImplicitFunction::new(|_| f64::NAN);
        assert!(!f.in_out(Point::ORIGIN));
    }

    #[test]
    fn test_polynomial_eval() {
        // x^2 + y^2 - 1
        let poly = Polynomial::new(vec![
            Term::new(1.0, 2, 0),
            Term::new(1.0, 0, 2),
            Term::new(-1.0, 0, 0),
        ]);
        assert_eq!(poly.degree(), 2);
        assert_eq!(poly.eval(Point::new(2.0, 1.0)), 4.0);

        let shape = ImplicitFunction::polynomial(poly);
        assert!(shape.in_out(Point::new(0.6, 0.8)));
        assert!(!shape.in_out(Point::new(2.0, 0.0)));
    }

    #[test]
    fn test_empty_polynomial_is_everywhere_inside() {
        let shape = ImplicitFunction::polynomial(Polynomial::default());
        assert!(shape.in_out(Point::new(123.0, -4.0)));
    }
}
