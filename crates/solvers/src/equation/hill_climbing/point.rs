use crate::equation::Evaluation;

/// A point with its evaluated residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The residual (function value) at x.
    pub residual: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, residual: f64) -> Self {
        Self { x, residual }
    }

    /// Returns `true` if this point is strictly closer to a root than `other`.
    ///
    /// Points are compared by `|residual|`. A NaN residual on either side
    /// never counts as an improvement.
    #[must_use]
    pub fn improves_on(&self, other: &Point) -> bool {
        self.residual.abs() < other.residual.abs()
    }
}

impl<I, O> From<&Evaluation<I, O, 1>> for Point {
    fn from(eval: &Evaluation<I, O, 1>) -> Self {
        Self::new(eval.x[0], eval.residual())
    }
}

/// One of the two neighbors probed in each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// The neighbor at `x - step_size`.
    Left,

    /// The neighbor at `x + step_size`.
    Right,
}

impl Probe {
    /// Returns the probed x for a current point and step size.
    #[must_use]
    pub fn at(self, x: f64, step_size: f64) -> f64 {
        match self {
            Probe::Left => x - step_size,
            Probe::Right => x + step_size,
        }
    }
}
