use std::convert::Infallible;

use hillclimb_core::EquationProblem;

/// Root of a scalar model: the residual is the model output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Root;

impl EquationProblem<1> for Root {
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
