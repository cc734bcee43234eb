use std::{convert::Infallible, fmt};

use hillclimb_core::Model;

/// The quadratic `a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    /// Creates a quadratic from its coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluates the quadratic at `x`.
    #[must_use]
    pub fn value(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Returns `b² - 4ac`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Returns `true` if the discriminant is non-negative.
    #[must_use]
    pub fn has_real_roots(&self) -> bool {
        self.discriminant() >= 0.0
    }

    /// Returns the x of the vertex, `-b / 2a`, or `None` when `a == 0`.
    #[must_use]
    pub fn vertex(&self) -> Option<f64> {
        #[allow(clippy::float_cmp)]
        if self.a == 0.0 {
            return None;
        }
        Some(-self.b / (2.0 * self.a))
    }
}

impl Model for Quadratic {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Infallible> {
        Ok(self.value(*x))
    }
}

impl fmt::Display for Quadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x) = {}x² + {}x + {}", self.a, self.b, self.c)
    }
}
