use hillclimb_core::{EquationProblem, Model, Observer};

use crate::equation::EvalError;

use super::{Action, Point, Probe};

/// Events emitted by the hill-climbing solver.
///
/// The solver emits one event per probe evaluation, so a round that runs to
/// completion produces a [`Probe::Left`] event followed by a [`Probe::Right`]
/// event. Every event carries the round number, the step size in effect for
/// that round, and the `current` point the probe is compared against.
pub enum Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation of a probe.
    Evaluated {
        /// Round number, starting at 1.
        iter: usize,

        /// Which neighbor was probed.
        probe: Probe,

        /// The evaluated point (x and residual).
        point: Point,

        /// The current point of the search.
        current: Point,

        /// The step size used for this round.
        step_size: f64,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// Round number, starting at 1.
        iter: usize,

        /// Which neighbor was probed.
        probe: Probe,

        /// The x value where evaluation failed.
        x: f64,

        /// The current point of the search.
        current: Point,

        /// The step size used for this round.
        step_size: f64,

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or residual computation).
    ProblemFailed {
        /// Round number, starting at 1.
        iter: usize,

        /// Which neighbor was probed.
        probe: Probe,

        /// The x value where evaluation failed.
        x: f64,

        /// The current point of the search.
        current: Point,

        /// The step size used for this round.
        step_size: f64,

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P> Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Returns the round number.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Evaluated { iter, .. }
            | Self::ModelFailed { iter, .. }
            | Self::ProblemFailed { iter, .. } => *iter,
        }
    }

    /// Returns which neighbor was probed.
    #[must_use]
    pub fn probe(&self) -> Probe {
        match self {
            Self::Evaluated { probe, .. }
            | Self::ModelFailed { probe, .. }
            | Self::ProblemFailed { probe, .. } => *probe,
        }
    }

    /// Returns the x value that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Evaluated { point, .. } => point.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the current point of the search.
    #[must_use]
    pub fn current(&self) -> Point {
        match self {
            Self::Evaluated { current, .. }
            | Self::ModelFailed { current, .. }
            | Self::ProblemFailed { current, .. } => *current,
        }
    }

    /// Returns the step size used for this round.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        match self {
            Self::Evaluated { step_size, .. }
            | Self::ModelFailed { step_size, .. }
            | Self::ProblemFailed { step_size, .. } => *step_size,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        iter: usize,
        probe: Probe,
        x: f64,
        current: Point,
        step_size: f64,
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed {
                    iter,
                    probe,
                    x,
                    current,
                    step_size,
                    error: e,
                };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed {
                    iter,
                    probe,
                    x,
                    current,
                    step_size,
                    error: e,
                };
                observer.observe(&event)
            }
        }
    }
}
