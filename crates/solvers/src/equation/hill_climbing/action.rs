/// Actions an observer can take during a hill-climbing search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the current estimate.
    ///
    /// The probe that triggered the event is not adopted, even if it improves
    /// on the current point.
    StopEarly,

    /// Treat this probe as no better than the current point.
    ///
    /// The search will not move to the probe. If neither probe of a round
    /// moves the search, the step size is halved as for any stagnant round.
    ///
    /// Use this for:
    /// - Recovering from model or problem errors when domain knowledge
    ///   suggests the failed region is not worth exploring.
    /// - Steering the search away from a region even when evaluation succeeded.
    AssumeWorse,
}
