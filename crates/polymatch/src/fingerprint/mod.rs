//! Shape fingerprints: canonical, order-free descriptors of planar point sets.
//!
//! Purpose
//! - Map an unordered point set to a numeric vector invariant under translation,
//!   rotation, uniform scale, and input order.
//! - Compare two such vectors with a plain Euclidean metric; thresholding is left to
//!   the caller.
//!
//! Model (short)
//! - Centroid-relative offsets, rescaled so the furthest point has radius 1.
//! - Canonical order: descending radius; among partners whose radius is within
//!   `FingerprintCfg::tie_eps` of the next slot, take the one closest in angle.
//! - One component per consecutive pair `(p_i, p_{i+1})`, the last point pairing with
//!   the first: `angle² · r_i · r_{i+1}`.
//!
//! Known gap: mirror images are not canonicalized and may or may not match.
//!
//! Code cross-refs: `crate::geom2::{Vertex, angle_between, centroid}`

mod engine;
mod metric;

pub use engine::{fingerprint, fingerprint_with, Fingerprint, FingerprintCfg};
pub use metric::{distance, euclidean};
