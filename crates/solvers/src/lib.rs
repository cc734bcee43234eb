//! Numerical solvers built on the `hillclimb-core` traits.
//!
//! # Modules
//!
//! - [`equation`] — root finding for equation problems, including the
//!   [`hill_climbing`](equation::hill_climbing) local search

pub mod equation;
