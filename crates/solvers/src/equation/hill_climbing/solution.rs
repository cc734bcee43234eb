use hillclimb_core::Snapshot;

/// Indicates why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The current residual fell below the configured tolerance.
    Converged,

    /// Ran every round of the budget without meeting the tolerance.
    ///
    /// The estimate may still be close to a root, or the search may have
    /// stalled at a local minimum of `|f|` that is not a root.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// What a single round did to the search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to the left probe.
    MoveLeft,

    /// Moved to the right probe.
    MoveRight,

    /// Stayed put and halved the step size.
    Shrink,
}

/// The result of a hill-climbing search.
///
/// `path` always starts with the start point and ends with `x`, and holds one
/// entry per completed round after that, so `path.len() == iters + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Final estimate of the root.
    pub x: f64,

    /// Residual at the reported estimate.
    pub residual: f64,

    /// Step size at the end of the search.
    pub step_size: f64,

    /// Every point the search occupied, one per completed round.
    pub path: Vec<f64>,

    /// What each completed round did; `steps[i]` led from `path[i]` to `path[i + 1]`.
    pub steps: Vec<Step>,

    /// Snapshot at the reported estimate.
    pub snapshot: Snapshot<I, O>,

    /// Number of completed rounds.
    pub iters: usize,
}
