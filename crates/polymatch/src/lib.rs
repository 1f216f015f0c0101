//! Shape fingerprints for planar point sets.
//!
//! A fingerprint is a canonical numeric vector derived from an unordered set of 2D
//! points. It does not change under translation, rotation, uniform scale, or a
//! reordering of the input, so two polygons can be compared by the Euclidean
//! distance of their fingerprints. Deciding what distance counts as "the same
//! shape" is left to the caller.
//!
//! ```
//! use polymatch::prelude::*;
//!
//! let a = vertices_from_flat(&[0.0, 0.0, 10.0, 10.0, 10.0, 20.0]).unwrap();
//! let b = rotate_about_centroid(&a, 1.0);
//! let d = distance(&fingerprint(&a).unwrap(), &fingerprint(&b).unwrap()).unwrap();
//! assert!(d < 1e-9);
//! ```

pub mod error;
pub mod fingerprint;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::ShapeError;
pub use fingerprint::{distance, fingerprint, fingerprint_with, Fingerprint, FingerprintCfg};
pub use geom2::{vertices_from_flat, ReplayToken, Vertex};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::ShapeError;
    pub use crate::fingerprint::{
        distance, euclidean, fingerprint, fingerprint_with, Fingerprint, FingerprintCfg,
    };
    pub use crate::geom2::transform::{
        displace, rotate_about_centroid, scale_about_centroid, translate,
    };
    pub use crate::geom2::{angle_between, centroid, vertices_from_flat, ReplayToken, Vertex};
    pub use nalgebra::Vector2 as Vec2;
}
