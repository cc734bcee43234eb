//! Hill-climbing root search for a single variable.
//!
//! # Algorithm
//!
//! Starting from a seed point, each round probes one step to the left and one
//! step to the right of the current estimate and moves to whichever probe has
//! a strictly smaller `|residual|`, preferring the left probe when both
//! improve. If neither improves, the search stays put and halves its step
//! size. The search stops as soon as `|residual|` drops below the configured
//! tolerance, or when the round budget runs out.
//!
//! Every point the search occupies is recorded in [`Solution::path`], which
//! starts at the seed and gains one entry per completed round.
//!
//! # When to Use
//!
//! Hill climbing is appropriate when:
//! - No bracket around the root is known, only a nearby seed
//! - Derivative information is unavailable
//! - A visible trajectory matters more than convergence speed
//!
//! # Limitations
//!
//! - **No convergence guarantee**: The search can stall at a local minimum of
//!   `|f|` that is not a root, such as the vertex of a parabola that never
//!   crosses zero. It then halves its step every round until the budget is
//!   spent.
//! - **Nearest root not guaranteed**: The root found depends on the seed and
//!   the initial step size.
//! - **No step floor**: The step size is never clamped, so a long stagnation
//!   can drive it to zero.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per probe evaluation:
//!
//! - [`Event::Evaluated`] — evaluation succeeded
//! - [`Event::ModelFailed`] — model returned an error
//! - [`Event::ProblemFailed`] — problem returned an error (input or residual)
//!
//! The start point is evaluated without an event. A round that reaches the
//! tolerance check and converges emits no events.
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::AssumeWorse`] to treat the probe as no better than the current
//! point (useful for error recovery or steering the search away from a region).

mod action;
mod config;
mod error;
mod event;
mod function;
mod point;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::{Point, Probe};
pub use solution::{Solution, Status, Step};

use hillclimb_core::{EquationProblem, Model, Observer};

use crate::equation::EvalError;

use function::{Function, Value};

/// Searches for a root of `f` starting from `start`.
///
/// This is the entry point for plain functions: `f` is total, so the search
/// cannot fail. Check [`Solution::status`] (or `|residual|`) to tell a root
/// from a stalled search.
pub fn search<F>(f: F, start: f64, config: &Config) -> Solution<f64, f64>
where
    F: Fn(f64) -> f64,
{
    match search::search(&Function(f), &Value, start, config, ()) {
        Ok(solution) => solution,
        Err(EvalError::Model(never) | EvalError::Problem(never)) => match never {},
    }
}

/// Searches for a root of the equation problem starting from `start`.
///
/// The observer receives an [`Event`] for each probe evaluation.
/// See the [module docs](self) for details on event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the model or problem fails at the start point, or
/// fails at a probe and the observer does not return an [`Action`] to recover.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    start: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search::search(model, problem, start, config, observer).map_err(Error::from)
}

/// Searches for a root of the equation problem without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    start: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, start, config, ())
}
