use super::engine::Fingerprint;
use crate::error::ShapeError;

/// Euclidean distance between two fingerprints.
///
/// Zero iff the fingerprints are component-wise identical. Fails with
/// `LengthMismatch` when the lengths differ or either is empty; callers comparing
/// shapes of different vertex counts should filter beforehand.
pub fn distance(a: &Fingerprint, b: &Fingerprint) -> Result<f64, ShapeError> {
    euclidean(a.components(), b.components())
}

/// Euclidean distance over raw component slices (same preconditions as [`distance`]).
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64, ShapeError> {
    if a.len() != b.len() || a.is_empty() {
        return Err(ShapeError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    Ok(sum.sqrt())
}
