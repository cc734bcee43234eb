use std::convert::Infallible;

use hillclimb_core::{EquationProblem, Model};

/// Adapts a plain `Fn(f64) -> f64` into a model.
pub(super) struct Function<F>(pub(super) F);

impl<F> Model for Function<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Infallible> {
        Ok((self.0)(*x))
    }
}

/// Equation problem whose residual is the function value itself.
pub(super) struct Value;

impl EquationProblem<1> for Value {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Infallible> {
        Ok([*output])
    }
}
