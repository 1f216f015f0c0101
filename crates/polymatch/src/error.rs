//! Error type shared by the geometry helpers and the fingerprint engine.

use thiserror::Error;

/// Failures surfaced by `vertices_from_flat`, `fingerprint` and `distance`.
///
/// All variants are caller errors: the operations are pure, so retrying with the
/// same input reproduces the same failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// Too few points, an odd coordinate count, or non-finite coordinates.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Every point coincides with the centroid; scale normalization is undefined.
    #[error("degenerate input: all points coincide with the centroid")]
    DegenerateInput,

    /// Fingerprints of different (or zero) length were compared.
    #[error("length mismatch: cannot compare fingerprints of length {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
}

impl ShapeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
