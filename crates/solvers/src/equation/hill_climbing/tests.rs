use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use hillclimb_core::{EquationProblem, Model};

use super::{
    Action, Config, Error, Event, Probe, Status, Step, search, solve, solve_unobserved,
};

fn quadratic(a: f64, b: f64, c: f64) -> impl Fn(f64) -> f64 {
    move |x| a * x * x + b * x + c
}

fn config(max_iters: usize) -> Config {
    Config::new(0.1, max_iters, 1e-6).unwrap()
}

#[test]
fn finds_left_root_of_downward_parabola() {
    // f(x) = -x² + 4x + 2 has roots at 2 ± √6; the vertex is at x = 2.
    let f = quadratic(-1.0, 4.0, 2.0);
    let start = 2.0 - 1.0;

    let solution = search(&f, start, &config(1000));

    assert_eq!(solution.status, Status::Converged);
    assert!(f(solution.x).abs() < 1e-6);
    assert_relative_eq!(solution.x, 2.0 - 6.0_f64.sqrt(), epsilon = 1e-6);
    assert_eq!(solution.path[0], start);
    assert_eq!(solution.path.last(), Some(&solution.x));
}

#[test]
fn finds_root_of_upward_parabola_from_far_seed() {
    // f(x) = 3x² - 5x + 2 has roots at 2/3 and 1.
    let f = quadratic(3.0, -5.0, 2.0);

    let solution = search(&f, -5.0, &config(1000));

    assert!(
        f(solution.x).abs() < 1e-6 || solution.path.len() == 1001,
        "neither converged nor exhausted the budget: {solution:?}"
    );
    if solution.status == Status::Converged {
        assert_relative_eq!(solution.x, 2.0 / 3.0, epsilon = 1e-5);
    }
}

#[test]
fn exhausts_budget_without_real_roots() {
    // f(x) = x² + x + 5 has a negative discriminant; min |f| is 4.75 at x = -0.5.
    let f = quadratic(1.0, 1.0, 5.0);

    let solution = search(&f, 3.0, &config(1000));

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 1000);
    assert_eq!(solution.path.len(), 1001);
    assert!(f(solution.x).abs() > 4.7);
    assert_relative_eq!(solution.x, -0.5, epsilon = 1e-6);
}

#[test]
fn zero_iterations_returns_start() {
    let f = quadratic(1.0, 0.0, -2.0);

    let solution = search(&f, 7.5, &config(0));

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.path, [7.5]);
    assert_eq!(solution.x, 7.5);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.residual, f(7.5));
}

#[test]
fn converges_immediately_at_a_root() {
    let solution = search(|x| x - 3.0, 3.0, &config(10));

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.path, [3.0]);
    assert_eq!(solution.iters, 0);
}

#[test]
fn path_length_stays_within_budget() {
    let f = quadratic(3.0, -5.0, 2.0);

    for max_iters in [0, 1, 2, 5, 17, 100] {
        for start in [-5.0, 0.0, 0.8, 4.0] {
            let solution = search(&f, start, &config(max_iters));

            assert_eq!(solution.path[0], start);
            assert!(!solution.path.is_empty());
            assert!(solution.path.len() <= max_iters + 1);
            assert_eq!(solution.path.len(), solution.iters + 1);
            assert_eq!(solution.steps.len(), solution.iters);
            assert_eq!(solution.path.last(), Some(&solution.x));
        }
    }
}

#[test]
fn early_stop_means_converged() {
    let f = quadratic(-1.0, 4.0, 2.0);

    for start in [-3.0, 1.0, 3.0, 6.0] {
        let solution = search(&f, start, &config(1000));

        if solution.iters < 1000 {
            assert_eq!(solution.status, Status::Converged);
            assert!(f(solution.x).abs() < 1e-6);
        }
    }
}

#[test]
fn identical_inputs_give_identical_results() {
    let f = quadratic(3.0, -5.0, 2.0);

    let first = search(&f, -5.0, &config(1000));
    let second = search(&f, -5.0, &config(1000));

    assert_eq!(first, second);
}

/// Model that evaluates an arbitrary quadratic.
struct Parabola {
    a: f64,
    b: f64,
    c: f64,
}

impl Model for Parabola {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(self.a * x * x + self.b * x + self.c)
    }
}

/// Residual: the model output itself.
struct OutputIsResidual;

impl EquationProblem<1> for OutputIsResidual {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([*output])
    }
}

#[test]
fn solve_matches_search() {
    let model = Parabola {
        a: -1.0,
        b: 4.0,
        c: 2.0,
    };

    let solved = solve_unobserved(&model, &OutputIsResidual, 3.0, &config(1000))
        .expect("infallible model");
    let searched = search(quadratic(-1.0, 4.0, 2.0), 3.0, &config(1000));

    assert_eq!(solved, searched);
    assert_eq!(solved.snapshot.input, solved.x);
    assert_eq!(solved.snapshot.output, solved.residual);
    assert_relative_eq!(solved.x, 2.0 + 6.0_f64.sqrt(), epsilon = 1e-6);
}

#[test]
fn step_size_never_increases() {
    let model = Parabola {
        a: 1.0,
        b: 1.0,
        c: 5.0,
    };

    let mut step_sizes = Vec::new();
    let observer = |event: &Event<'_, _, _>| {
        step_sizes.push(event.step_size());
        None
    };

    let solution =
        solve(&model, &OutputIsResidual, 2.0, &config(200), observer).expect("should complete");

    assert_eq!(step_sizes.len(), 400);
    assert!(step_sizes.windows(2).all(|w| w[1] <= w[0]));
    assert!(step_sizes.iter().all(|&s| s > 0.0));
    assert!(solution.step_size <= step_sizes[step_sizes.len() - 1]);
}

#[test]
fn step_size_halves_down_to_zero_without_a_floor() {
    // f(x) = x² + x + 5 has its minimum |f| = 4.75 exactly at x = -0.5.
    // From x = 0 with step 1: round 1 shrinks, round 2 lands on -0.5, and
    // every later round shrinks until the step underflows to zero.
    let f = quadratic(1.0, 1.0, 5.0);
    let config = Config::new(1.0, 1100, 1e-6).unwrap();

    let solution = search(&f, 0.0, &config);

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.path.len(), 1101);
    assert_eq!(solution.x, -0.5);
    assert_eq!(solution.step_size, 0.0);
    assert_eq!(solution.steps[..2], [Step::Shrink, Step::MoveLeft]);
    assert!(solution.steps[2..].iter().all(|&step| step == Step::Shrink));
    assert!(solution.path[2..].iter().all(|&x| x == -0.5));
}

#[test]
fn emits_left_then_right_each_round() {
    let model = Parabola {
        a: 1.0,
        b: 0.0,
        c: -2.0,
    };

    let mut seen = Vec::new();
    let observer = |event: &Event<'_, _, _>| {
        seen.push((event.iter(), event.probe()));
        None
    };

    solve(&model, &OutputIsResidual, 0.0, &config(2), observer).expect("should complete");

    assert_eq!(
        seen,
        [
            (1, Probe::Left),
            (1, Probe::Right),
            (2, Probe::Left),
            (2, Probe::Right),
        ]
    );
}

#[test]
fn observer_can_stop_early() {
    let model = Parabola {
        a: 1.0,
        b: 0.0,
        c: -2.0,
    };

    let mut events = 0;
    let observer = |_event: &Event<'_, _, _>| {
        events += 1;
        if events >= 3 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution = solve(&model, &OutputIsResidual, 0.0, &config(100), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    // Round 1 completes (2 events), round 2 stops on its left probe.
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.path.len(), 2);
    assert_eq!(events, 3);
}

#[test]
fn assume_worse_forces_stagnation() {
    // For f(x) = x starting at 1, the left probe always improves.
    // Rejecting every left probe leaves no improving move.
    let observer = |event: &Event<'_, _, _>| match event.probe() {
        Probe::Left => Some(Action::AssumeWorse),
        Probe::Right => None,
    };

    let model = Parabola {
        a: 0.0,
        b: 1.0,
        c: 0.0,
    };

    let solution = solve(&model, &OutputIsResidual, 1.0, &config(5), observer)
        .expect("should complete");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.path, [1.0; 6]);
    assert!(solution.steps.iter().all(|&step| step == Step::Shrink));
    assert_relative_eq!(solution.step_size, 0.1 / 32.0);
}

#[test]
fn assume_worse_steers_to_other_root() {
    // f(x) = x² - 1 from x = 0: both probes improve, so the left one wins and
    // the search heads for -1. Rejecting every x < 0 sends it to +1 instead.
    let model = Parabola {
        a: 1.0,
        b: 0.0,
        c: -1.0,
    };

    let unsteered =
        solve_unobserved(&model, &OutputIsResidual, 0.0, &config(1000)).expect("should complete");
    assert_relative_eq!(unsteered.x, -1.0, epsilon = 1e-6);

    let observer = |event: &Event<'_, _, _>| (event.x() < 0.0).then_some(Action::AssumeWorse);

    let steered = solve(&model, &OutputIsResidual, 0.0, &config(1000), observer)
        .expect("should complete");

    assert_eq!(steered.status, Status::Converged);
    assert_relative_eq!(steered.x, 1.0, epsilon = 1e-6);
}

/// Model for `√x - 1`, undefined for negative `x`.
struct SqrtMinusOne;

#[derive(Debug, Clone, Error)]
#[error("square root of negative number {0}")]
struct NegativeSqrt(f64);

impl Model for SqrtMinusOne {
    type Input = f64;
    type Output = f64;
    type Error = NegativeSqrt;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        if *x < 0.0 {
            Err(NegativeSqrt(*x))
        } else {
            Ok(x.sqrt() - 1.0)
        }
    }
}

#[test]
fn probe_failure_without_action_errors() {
    let observer = |_event: &Event<'_, _, _>| None;

    let result = solve(&SqrtMinusOne, &OutputIsResidual, 0.05, &config(100), observer);

    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn probe_failure_recovers_with_assume_worse() {
    let mut failures = 0;
    let observer = |event: &Event<'_, _, _>| {
        if let Event::ModelFailed { probe, .. } = event {
            assert_eq!(*probe, Probe::Left);
            failures += 1;
            Some(Action::AssumeWorse)
        } else {
            None
        }
    };

    let solution = solve(&SqrtMinusOne, &OutputIsResidual, 0.05, &config(1000), observer)
        .expect("should recover and converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, 1.0, epsilon = 1e-5);
    assert_eq!(failures, 1);
}

#[test]
fn probe_failure_can_stop_early() {
    let observer = |event: &Event<'_, _, _>| {
        matches!(event, Event::ModelFailed { .. }).then_some(Action::StopEarly)
    };

    let solution = solve(&SqrtMinusOne, &OutputIsResidual, 0.05, &config(100), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.path, [0.05]);
}

#[test]
fn start_failure_errors_without_events() {
    let mut events = 0;
    let observer = |_event: &Event<'_, _, _>| {
        events += 1;
        Some(Action::AssumeWorse)
    };

    let result = solve(&SqrtMinusOne, &OutputIsResidual, -1.0, &config(100), observer);

    assert!(matches!(result, Err(Error::Model(_))));
    assert_eq!(events, 0);
}
