//! Point value type and the vector primitives used by the engine.
//!
//! - `Vertex`: immutable 2D coordinate with value equality.
//! - `angle_between`: unsigned angle between two directions from a common origin.

use nalgebra::Vector2;

/// A point in the plane. No identity beyond its coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    /// Euclidean distance; zero iff the coordinates are equal.
    #[inline]
    pub fn distance(self, other: Vertex) -> f64 {
        (self.to_vec2() - other.to_vec2()).norm()
    }
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vector2<f64>> for Vertex {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vertex> for Vector2<f64> {
    #[inline]
    fn from(p: Vertex) -> Self {
        p.to_vec2()
    }
}

impl From<(f64, f64)> for Vertex {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Angle in `[0, π]` between `u` and `v`.
///
/// Pre: both vectors are non-zero (the result is NaN otherwise).
/// The cosine is clamped to `[-1, 1]` so rounding never pushes `acos` out of its domain.
#[inline]
pub fn angle_between(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    let cos = u.dot(&v) / (u.norm() * v.norm());
    cos.clamp(-1.0, 1.0).acos()
}
