//! Shape files, fingerprint records, and the threshold policy used by `compare`/`search`.

use anyhow::{bail, Context, Result};
use polymatch::{distance, fingerprint_with, vertices_from_flat, Fingerprint, FingerprintCfg};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One polygon as stored in a shape file: a flat `[x0, y0, x1, y1, ...]` list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: String,
    pub points: Vec<f64>,
}

/// Fingerprint of a `ShapeRecord`, as written by `polymatch fingerprint`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FingerprintRecord {
    pub id: String,
    pub vertices: usize,
    pub fingerprint: Vec<f64>,
}

/// A library entry within the threshold of the query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Match {
    pub id: String,
    pub distance: f64,
}

pub fn read_shapes(path: &Path) -> Result<Vec<ShapeRecord>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Parse `"x0,y0,x1,y1,..."` (whitespace tolerated) into a coordinate list.
pub fn parse_coords(s: &str) -> Result<Vec<f64>> {
    let coords = s
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<f64>()
                .with_context(|| format!("invalid coordinate {t:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    if coords.is_empty() {
        bail!("no coordinates given");
    }
    Ok(coords)
}

pub fn fingerprint_coords(coords: &[f64], cfg: FingerprintCfg) -> Result<Fingerprint> {
    let pts = vertices_from_flat(coords)?;
    Ok(fingerprint_with(&pts, cfg)?)
}

pub fn fingerprint_records(shapes: &[ShapeRecord], cfg: FingerprintCfg) -> Result<Vec<FingerprintRecord>> {
    shapes
        .iter()
        .map(|s| {
            let f = fingerprint_coords(&s.points, cfg)
                .with_context(|| format!("fingerprinting shape {:?}", s.id))?;
            Ok(FingerprintRecord {
                id: s.id.clone(),
                vertices: s.points.len() / 2,
                fingerprint: f.into_vec(),
            })
        })
        .collect()
}

/// Same-shape policy: distance strictly below `threshold`.
#[inline]
pub fn is_match(distance: f64, threshold: f64) -> bool {
    distance < threshold
}

/// Entries with the query's vertex count whose distance passes `is_match`, closest first.
pub fn search(
    library: &[FingerprintRecord],
    query: &Fingerprint,
    threshold: f64,
    limit: usize,
) -> Vec<Match> {
    let mut hits: Vec<Match> = library
        .iter()
        .filter(|rec| rec.fingerprint.len() == query.len())
        .filter_map(|rec| {
            let d = polymatch::fingerprint::euclidean(&rec.fingerprint, query.components()).ok()?;
            is_match(d, threshold).then(|| Match {
                id: rec.id.clone(),
                distance: d,
            })
        })
        .collect();
    hits.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    hits.truncate(limit);
    hits
}

/// Distance between two coordinate lists; errors on differing vertex counts.
pub fn compare_coords(a: &[f64], b: &[f64], cfg: FingerprintCfg) -> Result<f64> {
    let fa = fingerprint_coords(a, cfg)?;
    let fb = fingerprint_coords(b, cfg)?;
    Ok(distance(&fa, &fb)?)
}
