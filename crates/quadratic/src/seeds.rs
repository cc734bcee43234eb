use thiserror::Error;

use crate::Quadratic;

/// Reasons a quadratic has no seed points.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SeedError {
    #[error("discriminant = {discriminant:.2} < 0: no real roots exist")]
    NoRealRoots { discriminant: f64 },

    #[error("leading coefficient is zero: no vertex to seed from")]
    Degenerate,
}

/// Returns start points `vertex - offset` and `vertex + offset`.
///
/// A parabola with real roots has one on each side of its vertex, so one
/// search from each seed can find both.
///
/// # Errors
///
/// Returns [`SeedError::NoRealRoots`] if the discriminant is negative, or
/// [`SeedError::Degenerate`] if `a == 0`.
pub fn seeds(quadratic: &Quadratic, offset: f64) -> Result<[f64; 2], SeedError> {
    let discriminant = quadratic.discriminant();
    if discriminant < 0.0 {
        return Err(SeedError::NoRealRoots { discriminant });
    }

    let vertex = quadratic.vertex().ok_or(SeedError::Degenerate)?;
    Ok([vertex - offset, vertex + offset])
}
