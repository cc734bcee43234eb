//! Quadratic functions as root-search problems.
//!
//! - [`Quadratic`] — a [`Model`] for `a·x² + b·x + c`
//! - [`Root`] — the [`EquationProblem`] whose residual is the model output
//! - [`seeds`] — start points on either side of the vertex, chosen from the
//!   discriminant
//!
//! The discriminant and vertex only decide where a search starts. Roots are
//! always found by the search itself, never from the quadratic formula.
//!
//! [`Model`]: hillclimb_core::Model
//! [`EquationProblem`]: hillclimb_core::EquationProblem

mod model;
mod root;
mod seeds;

pub use model::Quadratic;
pub use root::Root;
pub use seeds::{SeedError, seeds};
