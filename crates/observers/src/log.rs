//! Structured logging of solver events through `tracing`.

use hillclimb_core::{EquationProblem, Model, Observer};
use hillclimb_solvers::equation::hill_climbing::Event;
use tracing::{debug, warn};

/// An observer that logs every hill-climbing event and never intervenes.
///
/// Successful probes are logged at `DEBUG` and failed probes at `WARN`, each
/// tagged with the observer's `search` label so interleaved searches can be
/// told apart. Install a subscriber (e.g. `tracing_subscriber::fmt`) to see
/// the output.
///
/// Pass `&mut LogObserver` to keep access to [`events`](Self::events) after
/// the search completes.
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
    events: usize,
}

impl LogObserver {
    /// Creates a logger whose events carry `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            events: 0,
        }
    }

    /// Returns the label attached to every logged event.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns how many events have been logged.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }

    fn log<M, P>(&mut self, event: &Event<'_, M, P>)
    where
        M: Model,
        P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    {
        self.events += 1;
        let current = event.current();

        match event {
            Event::Evaluated { point, .. } => debug!(
                search = %self.label,
                iter = event.iter(),
                probe = ?event.probe(),
                x = point.x,
                residual = point.residual,
                current_x = current.x,
                current_residual = current.residual,
                step_size = event.step_size(),
                "probe evaluated"
            ),
            Event::ModelFailed { error, .. } => warn!(
                search = %self.label,
                iter = event.iter(),
                probe = ?event.probe(),
                x = event.x(),
                step_size = event.step_size(),
                error = %error,
                "model failed at probe"
            ),
            Event::ProblemFailed { error, .. } => warn!(
                search = %self.label,
                iter = event.iter(),
                probe = ?event.probe(),
                x = event.x(),
                step_size = event.step_size(),
                error = %error,
                "problem failed at probe"
            ),
        }
    }
}

impl<M, P, A> Observer<Event<'_, M, P>, A> for LogObserver
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'_, M, P>) -> Option<A> {
        self.log(event);
        None
    }
}

/// Allows `&mut LogObserver` to be passed to solvers that take an observer by
/// value, so the logger can still be inspected after the search completes.
impl<M, P, A> Observer<Event<'_, M, P>, A> for &mut LogObserver
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn observe(&mut self, event: &Event<'_, M, P>) -> Option<A> {
        self.log(event);
        None
    }
}
