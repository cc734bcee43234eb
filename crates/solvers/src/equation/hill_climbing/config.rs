use thiserror::Error;

/// Configuration for the hill-climbing solver.
///
/// A config is validated once on construction and never changes during a
/// search, so the same value can drive any number of independent searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    step_size: f64,
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a hill-climbing solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step_size must be finite and positive")]
    StepSize,

    #[error("residual_tol must be finite and positive")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 1000, 1e-6).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated step size and tolerance.
    ///
    /// `max_iters` may be zero, in which case the search returns its start
    /// point without probing any neighbors.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_size` or `residual_tol` is not finite and
    /// strictly positive.
    pub fn new(step_size: f64, max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::StepSize);
        }
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            step_size,
            max_iters,
            residual_tol,
        })
    }

    /// Returns the initial distance between the current point and each probe.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the maximum number of search rounds.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the residual magnitude below which the search has converged.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}
