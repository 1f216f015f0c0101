//! Planar point sets (value type, vector helpers, constructors, transformers).
//!
//! Purpose
//! - Provide the `Vertex` value type consumed by the fingerprint engine plus the two
//!   primitives it needs: Euclidean distance and the angle between two directions.
//! - Keep the arithmetic on `nalgebra::Vector2<f64>`; `Vertex` is the boundary type.
//!
//! Conventions
//! - Angles are in radians; rotations are counter-clockwise.
//! - Point sets are plain slices (`&[Vertex]`), unordered as far as the engine cares.
//!
//! Code cross-refs: `crate::fingerprint::fingerprint`, `transform::rotate_about_centroid`

pub mod transform;
mod types;
mod util;

pub use transform::ReplayToken;
pub use types::{angle_between, Vertex};
pub use util::{centroid, vertices_from_flat};

#[cfg(test)]
mod tests;
