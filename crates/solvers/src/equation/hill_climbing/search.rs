use hillclimb_core::{EquationProblem, Model, Observer};

use crate::equation::{EvalError, Evaluation, evaluate};

use super::{Action, Config, Event, Point, Probe, Solution, Status, state::State};

type SearchResult<M, P> = Result<
    Solution<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as EquationProblem<1>>::Error>,
>;

/// Core hill-climbing loop.
///
/// The start point is evaluated without an event; its failure is returned
/// directly since there is no current point to fall back on.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    start: f64,
    config: &Config,
    mut observer: Obs,
) -> SearchResult<M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let mut state = State::new(evaluate(model, problem, [start])?, config.step_size());

    for iter in 1..=config.max_iters() {
        if state.is_converged(config.residual_tol()) {
            return Ok(state.into_solution(Status::Converged));
        }

        let mut probed = [None, None];
        for (slot, probe) in probed.iter_mut().zip([Probe::Left, Probe::Right]) {
            let round = Round {
                iter,
                probe,
                x: state.probe_x(probe),
                current: state.current(),
                step_size: state.step_size(),
            };
            match eval_and_observe(model, problem, &round, &mut observer)? {
                ProbeOutcome::Continue(eval) => *slot = Some(eval),
                ProbeOutcome::AssumeWorse => {}
                ProbeOutcome::StopEarly => {
                    return Ok(state.into_solution(Status::StoppedByObserver));
                }
            }
        }

        let [left, right] = probed;
        state.advance(left, right);
    }

    Ok(state.into_solution(Status::MaxIters))
}

// ============================================================================
// Eval + observe helper
// ============================================================================

/// Everything an event needs to know about the probe being evaluated.
struct Round {
    iter: usize,
    probe: Probe,
    x: f64,
    current: Point,
    step_size: f64,
}

enum ProbeOutcome<I, O> {
    Continue(Evaluation<I, O, 1>),
    AssumeWorse,
    StopEarly,
}

/// Evaluate a probe, emit its event, and handle the observer action.
fn eval_and_observe<M, P, Obs>(
    model: &M,
    problem: &P,
    round: &Round,
    observer: &mut Obs,
) -> Result<ProbeOutcome<M::Input, M::Output>, EvalError<M::Error, P::Error>>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    match evaluate(model, problem, [round.x]) {
        Ok(eval) => {
            let event = Event::Evaluated {
                iter: round.iter,
                probe: round.probe,
                point: Point::from(&eval),
                current: round.current,
                step_size: round.step_size,
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
            };
            match observer.observe(&event) {
                Some(Action::StopEarly) => Ok(ProbeOutcome::StopEarly),
                Some(Action::AssumeWorse) => Ok(ProbeOutcome::AssumeWorse),
                None => Ok(ProbeOutcome::Continue(eval)),
            }
        }
        Err(e) => {
            let action = Event::emit_failure(
                round.iter,
                round.probe,
                round.x,
                round.current,
                round.step_size,
                &e,
                observer,
            );
            match action {
                Some(Action::StopEarly) => Ok(ProbeOutcome::StopEarly),
                Some(Action::AssumeWorse) => Ok(ProbeOutcome::AssumeWorse),
                None => Err(e),
            }
        }
    }
}
