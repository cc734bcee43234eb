//! Solvers for equation problems — finding roots of a scalar function.
//!
//! An [`EquationProblem`] maps solver variables `x: [f64; N]` to model inputs,
//! calls the model, and computes residuals. Solvers in this module drive those
//! residuals toward zero.
//!
//! # Solvers
//!
//! - [`hill_climbing`] — greedy local search from a single seed point, with no
//!   bracket and no convergence guarantee
//!
//! [`EquationProblem`]: hillclimb_core::EquationProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod hill_climbing;
