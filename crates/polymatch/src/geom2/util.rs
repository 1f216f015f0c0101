use nalgebra::Vector2;

use super::types::Vertex;
use crate::error::ShapeError;

/// Arithmetic mean of all points; `None` for an empty set.
pub fn centroid(points: &[Vertex]) -> Option<Vector2<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p.to_vec2());
    Some(sum / points.len() as f64)
}

/// Build a point set from a flat `[x0, y0, x1, y1, ...]` coordinate list.
///
/// Rejects fewer than two values, an odd count, and non-finite coordinates.
pub fn vertices_from_flat(coords: &[f64]) -> Result<Vec<Vertex>, ShapeError> {
    if coords.len() < 2 {
        return Err(ShapeError::invalid(
            "at least one coordinate pair is required",
        ));
    }
    if coords.len() % 2 != 0 {
        return Err(ShapeError::invalid(format!(
            "coordinate count must be even, got {}",
            coords.len()
        )));
    }
    if let Some(k) = coords.iter().position(|c| !c.is_finite()) {
        return Err(ShapeError::invalid(format!(
            "coordinate {k} is not finite"
        )));
    }
    Ok(coords
        .chunks_exact(2)
        .map(|xy| Vertex::new(xy[0], xy[1]))
        .collect())
}
