use nalgebra::Vector2;

use crate::error::ShapeError;
use crate::geom2::{angle_between, centroid, Vertex};

/// Fingerprint tolerances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FingerprintCfg {
    /// Absolute tolerance on normalized radius under which two points count as
    /// lying on the same ring (tie-break candidates).
    pub tie_eps: f64,
}

impl Default for FingerprintCfg {
    fn default() -> Self {
        Self { tie_eps: 0.01 }
    }
}

/// Canonical descriptor of a point set; one non-negative component per input point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fingerprint(Vec<f64>);

impl Fingerprint {
    #[inline]
    pub fn components(&self) -> &[f64] {
        &self.0
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
    /// Shorthand for [`super::distance`].
    pub fn distance(&self, other: &Fingerprint) -> Result<f64, ShapeError> {
        super::distance(self, other)
    }
}

impl From<Fingerprint> for Vec<f64> {
    fn from(f: Fingerprint) -> Self {
        f.0
    }
}

impl AsRef<[f64]> for Fingerprint {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Fingerprint with the default tolerances.
pub fn fingerprint(points: &[Vertex]) -> Result<Fingerprint, ShapeError> {
    fingerprint_with(points, FingerprintCfg::default())
}

/// A centroid-relative offset and its (normalized) radius.
#[derive(Clone, Copy, Debug)]
struct Ring {
    v: Vector2<f64>,
    r: f64,
}

/// Fingerprint a point set.
///
/// Pre: at least two finite points, not all at the centroid.
/// Post: `len() == points.len()`; components are non-negative and at most π² (up to rounding).
pub fn fingerprint_with(points: &[Vertex], cfg: FingerprintCfg) -> Result<Fingerprint, ShapeError> {
    if points.len() < 2 {
        return Err(ShapeError::invalid("at least two points required"));
    }
    if let Some(k) = points.iter().position(|p| !p.is_finite()) {
        return Err(ShapeError::invalid(format!("point {k} is not finite")));
    }
    let c = centroid(points).ok_or_else(|| ShapeError::invalid("at least two points required"))?;

    let offsets: Vec<Vector2<f64>> = points.iter().map(|p| p.to_vec2() - c).collect();
    // Bring every component into [-1, 1] before squaring so norms neither overflow
    // nor underflow at extreme coordinate scales.
    let spread = offsets
        .iter()
        .map(|v| v.x.abs().max(v.y.abs()))
        .fold(0.0, f64::max);
    if !spread.is_finite() {
        return Err(ShapeError::invalid("coordinates overflow"));
    }
    if spread <= 0.0 {
        return Err(ShapeError::DegenerateInput);
    }
    let mut rings: Vec<Ring> = offsets
        .into_iter()
        .map(|v| {
            let v = v / spread;
            Ring { v, r: v.norm() }
        })
        .collect();
    // Stable descending sort; NaN is excluded above.
    rings.sort_by(|a, b| b.r.partial_cmp(&a.r).unwrap_or(std::cmp::Ordering::Equal));

    // furthest lies in [1, √2] after the prescale.
    let furthest = rings[0].r;
    for ring in &mut rings {
        ring.v /= furthest;
        ring.r = ring.v.norm();
    }

    let n = rings.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let a = rings[i];
        let (angle, partner) = if i + 1 < n {
            let (best, angle) = pick_partner(&rings, i, cfg.tie_eps);
            rings.swap(i + 1, best);
            (angle, rings[i + 1])
        } else {
            // Last point closes the loop with the first.
            let b = rings[0];
            (pair_angle(a, b), b)
        };
        out.push(angle * angle * a.r * partner.r);
    }
    Ok(Fingerprint(out))
}

/// Index (>= i+1) of the partner for slot `i` and its angle to `rings[i]`.
///
/// Candidates are the unplaced points whose radius is within `tie_eps` of the
/// point currently in slot `i+1`; the smallest angle wins, earlier index on ties.
fn pick_partner(rings: &[Ring], i: usize, tie_eps: f64) -> (usize, f64) {
    let a = rings[i];
    let slot_r = rings[i + 1].r;
    let mut best = i + 1;
    let mut best_angle = pair_angle(a, rings[i + 1]);
    for (j, cand) in rings.iter().enumerate().skip(i + 2) {
        if (cand.r - slot_r).abs() > tie_eps {
            continue;
        }
        let angle = pair_angle(a, *cand);
        if angle < best_angle {
            best = j;
            best_angle = angle;
        }
    }
    (best, best_angle)
}

/// Angle at the centroid between two rings; zero when either sits on the centroid.
#[inline]
fn pair_angle(a: Ring, b: Ring) -> f64 {
    if a.r == 0.0 || b.r == 0.0 {
        return 0.0;
    }
    angle_between(a.v, b.v)
}
