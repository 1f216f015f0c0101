//! Shape transformers used to exercise invariance (rotation, translation, scale, jitter).
//!
//! Model
//! - Rigid motions and uniform scale act about the centroid, so the centroid of the
//!   output equals the centroid of the input (up to rounding).
//! - Jitter draws per-axis offsets uniformly from `[-max, max]` using an injected RNG.
//!   `ReplayToken` turns `(seed, index)` into an `StdRng` for reproducible streams.
//!
//! Code cross-refs: `super::centroid`, `crate::fingerprint::fingerprint`

use nalgebra::{Rotation2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Vertex;
use super::util::centroid;

/// Replay token to make jitter draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Rotate every point counter-clockwise by `angle` radians about the set's centroid.
pub fn rotate_about_centroid(points: &[Vertex], angle: f64) -> Vec<Vertex> {
    let Some(c) = centroid(points) else {
        return Vec::new();
    };
    let rot = Rotation2::new(angle);
    points
        .iter()
        .map(|p| Vertex::from(rot * (p.to_vec2() - c) + c))
        .collect()
}

/// Shift every point by `(dx, dy)`.
pub fn translate(points: &[Vertex], dx: f64, dy: f64) -> Vec<Vertex> {
    let t = Vector2::new(dx, dy);
    points.iter().map(|p| Vertex::from(p.to_vec2() + t)).collect()
}

/// Scale every centroid offset by `factor`.
pub fn scale_about_centroid(points: &[Vertex], factor: f64) -> Vec<Vertex> {
    let Some(c) = centroid(points) else {
        return Vec::new();
    };
    points
        .iter()
        .map(|p| Vertex::from((p.to_vec2() - c) * factor + c))
        .collect()
}

/// Move each coordinate independently by a uniform offset in `[-max_displacement, max_displacement]`.
pub fn displace<R: Rng>(points: &[Vertex], max_displacement: f64, rng: &mut R) -> Vec<Vertex> {
    let m = max_displacement.abs();
    if m == 0.0 {
        return points.to_vec();
    }
    points
        .iter()
        .map(|p| Vertex::new(p.x + rng.gen_range(-m..=m), p.y + rng.gen_range(-m..=m)))
        .collect()
}
