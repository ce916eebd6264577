//! Error types for ray casting

use thiserror::Error;

/// Errors raised while setting up a ray cast
///
/// Geometric edge cases (parallel slabs, grazing rays, degenerate boxes,
/// volumes behind the origin) are never errors; they resolve to "no hit".
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RaycastError {
    /// The ray direction has zero (or non-finite) length and cannot be normalized
    #[error("Ray direction must have a non-zero finite length, got ({0}, {1}, {2})")]
    ZeroDirection(f64, f64, f64),
}
