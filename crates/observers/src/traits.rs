//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once against what an event carries rather than
//! against a concrete solver.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanAssumeWorse`] — actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use hillclimb_core::Observer;
//! use hillclimb_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use hillclimb_core::{EquationProblem, Model};

use hillclimb_solvers::equation::hill_climbing;

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no residual
    /// is available.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that treats this evaluation as no improvement.
    fn assume_worse() -> Self;
}

impl<M, P> HasResidual for hill_climbing::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn residual(&self) -> f64 {
        match self {
            hill_climbing::Event::Evaluated { point, .. } => point.residual,
            hill_climbing::Event::ModelFailed { .. }
            | hill_climbing::Event::ProblemFailed { .. } => f64::NAN,
        }
    }
}

impl CanStopEarly for hill_climbing::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for hill_climbing::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hillclimb_core::Observer;
    use hillclimb_quadratic::{Quadratic, Root};
    use hillclimb_solvers::equation::hill_climbing::{Config, Status, solve};

    /// Stops once a probe lands within `tolerance` of a root.
    struct GoodEnough {
        tolerance: f64,
    }

    impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.residual().abs() < self.tolerance).then(A::stop_early)
        }
    }

    /// Rejects every probe, whatever the solver.
    struct RejectAll;

    impl<E, A: CanAssumeWorse> Observer<E, A> for RejectAll {
        fn observe(&mut self, _event: &E) -> Option<A> {
            Some(A::assume_worse())
        }
    }

    #[test]
    fn generic_observer_stops_hill_climbing() {
        let q = Quadratic::new(1.0, 0.0, -4.0);
        let observer = GoodEnough { tolerance: 0.5 };

        let solution =
            solve(&q, &Root, 1.0, &Config::default(), observer).expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        // The probe that met the tolerance is reported, not adopted.
        assert!(q.value(solution.x).abs() >= 0.5);
    }

    #[test]
    fn generic_observer_can_freeze_the_search() {
        let q = Quadratic::new(1.0, 0.0, -4.0);
        let config = Config::new(0.1, 10, 1e-6).unwrap();

        let solution = solve(&q, &Root, 1.0, &config, RejectAll).expect("should complete");

        assert_eq!(solution.status, Status::MaxIters);
        assert!(solution.path.iter().all(|&x| x == 1.0));
    }
}
