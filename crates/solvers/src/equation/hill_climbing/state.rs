use hillclimb_core::Snapshot;

use crate::equation::Evaluation;

use super::{Point, Probe, Solution, Status, Step};

/// Factor applied to the step size after a stagnant round.
const SHRINK_FACTOR: f64 = 0.5;

/// Loop-carried state of a single search.
pub(super) struct State<I, O> {
    current: Point,
    snapshot: Snapshot<I, O>,
    step_size: f64,
    path: Vec<f64>,
    steps: Vec<Step>,
}

impl<I, O> State<I, O> {
    /// Starts a search at an evaluated start point.
    pub(super) fn new(start: Evaluation<I, O, 1>, step_size: f64) -> Self {
        let current = Point::from(&start);
        Self {
            current,
            snapshot: start.snapshot,
            step_size,
            path: vec![current.x],
            steps: Vec::new(),
        }
    }

    pub(super) fn current(&self) -> Point {
        self.current
    }

    pub(super) fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the x to evaluate for a probe this round.
    pub(super) fn probe_x(&self, probe: Probe) -> f64 {
        probe.at(self.current.x, self.step_size)
    }

    pub(super) fn is_converged(&self, residual_tol: f64) -> bool {
        self.current.residual.abs() < residual_tol
    }

    /// Applies the move rule for one round and records the resulting point.
    ///
    /// A probe of `None` never moves the search. The left probe wins when
    /// both improve on the current point.
    pub(super) fn advance(
        &mut self,
        left: Option<Evaluation<I, O, 1>>,
        right: Option<Evaluation<I, O, 1>>,
    ) {
        let current = self.current;
        let improves = |eval: &Evaluation<I, O, 1>| Point::from(eval).improves_on(&current);

        let step = match (left, right) {
            (Some(eval), _) if improves(&eval) => {
                self.adopt(eval);
                Step::MoveLeft
            }
            (_, Some(eval)) if improves(&eval) => {
                self.adopt(eval);
                Step::MoveRight
            }
            _ => {
                self.step_size *= SHRINK_FACTOR;
                Step::Shrink
            }
        };

        self.path.push(self.current.x);
        self.steps.push(step);
    }

    fn adopt(&mut self, eval: Evaluation<I, O, 1>) {
        self.current = Point::from(&eval);
        self.snapshot = eval.snapshot;
    }

    pub(super) fn into_solution(self, status: Status) -> Solution<I, O> {
        Solution {
            status,
            x: self.current.x,
            residual: self.current.residual,
            step_size: self.step_size,
            iters: self.path.len() - 1,
            path: self.path,
            steps: self.steps,
            snapshot: self.snapshot,
        }
    }
}
