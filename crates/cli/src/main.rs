use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use polymatch::geom2::transform::{displace, rotate_about_centroid};
use polymatch::{vertices_from_flat, FingerprintCfg, ReplayToken};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod shapes;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "polymatch")]
#[command(about = "Fingerprint and compare planar polygons")]
struct Cmd {
    /// Optional label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    /// Radius tolerance for the same-ring tie-break
    #[arg(long, default_value_t = 0.01)]
    tie_eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Fingerprint every shape in a JSON shape file
    Fingerprint {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Distance between two shapes given as "x0,y0,x1,y1,..."
    Compare {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
        #[arg(long, default_value_t = 1.0)]
        threshold: f64,
    },
    /// Rank shapes from a shape file against a query shape
    Search {
        #[arg(long)]
        library: PathBuf,
        #[arg(long)]
        query: String,
        #[arg(long, default_value_t = 1.0)]
        threshold: f64,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Rotate and jitter a shape (replayable via seed)
    Perturb {
        #[arg(long)]
        points: String,
        #[arg(long, default_value_t = 0.0)]
        angle: f64,
        #[arg(long, default_value_t = 0.0)]
        jitter: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    ensure!(
        cmd.tie_eps.is_finite() && cmd.tie_eps >= 0.0,
        "--tie-eps must be a non-negative number"
    );
    let cfg = FingerprintCfg { tie_eps: cmd.tie_eps };
    match cmd.action {
        Action::Fingerprint { input, out } => fingerprint(&input, &out, cfg, cmd.tag),
        Action::Compare { a, b, threshold } => compare(&a, &b, threshold, cfg),
        Action::Search {
            library,
            query,
            threshold,
            limit,
        } => search(&library, &query, threshold, limit, cfg),
        Action::Perturb {
            points,
            angle,
            jitter,
            seed,
        } => perturb(&points, angle, jitter, seed),
        Action::Report => report(cmd.tag, cfg),
    }
}

fn fingerprint(input: &Path, out: &Path, cfg: FingerprintCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "fingerprint");
    let shapes = shapes::read_shapes(input)?;
    let records = shapes::fingerprint_records(&shapes, cfg)?;
    tracing::info!(shapes = records.len(), "fingerprinted");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&records)?)?;

    let payload = Payload::new(
        json!({
            "input": input.to_string_lossy(),
            "tie_eps": cfg.tie_eps,
            "shapes": records.len(),
        }),
        tag,
    );
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::debug!(provenance = %prov.display(), "sidecar written");
    Ok(())
}

fn compare(a: &str, b: &str, threshold: f64, cfg: FingerprintCfg) -> Result<()> {
    let ca = shapes::parse_coords(a)?;
    let cb = shapes::parse_coords(b)?;
    let d = shapes::compare_coords(&ca, &cb, cfg)?;
    let same = shapes::is_match(d, threshold);
    tracing::info!(distance = d, threshold, same, "compare");
    let obj = json!({
        "distance": d,
        "threshold": threshold,
        "match": same,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn search(library: &Path, query: &str, threshold: f64, limit: usize, cfg: FingerprintCfg) -> Result<()> {
    let shapes = shapes::read_shapes(library)?;
    let records = shapes::fingerprint_records(&shapes, cfg)?;
    let q = shapes::fingerprint_coords(&shapes::parse_coords(query)?, cfg)?;
    let hits = shapes::search(&records, &q, threshold, limit);
    tracing::info!(
        library = %library.display(),
        candidates = records.len(),
        hits = hits.len(),
        "search"
    );
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}

fn perturb(points: &str, angle: f64, jitter: f64, seed: u64) -> Result<()> {
    let pts = vertices_from_flat(&shapes::parse_coords(points)?)?;
    let mut rng = ReplayToken::new(seed, 0).to_std_rng();
    let moved = rotate_about_centroid(&displace(&pts, jitter, &mut rng), angle);
    tracing::info!(angle, jitter, seed, vertices = moved.len(), "perturb");
    let flat: Vec<f64> = moved.iter().flat_map(|p| [p.x, p.y]).collect();
    println!("{}", serde_json::to_string(&flat)?);
    Ok(())
}

fn report(tag: Option<String>, cfg: FingerprintCfg) -> Result<()> {
    let payload = Payload::new(json!({ "tie_eps": cfg.tie_eps }), tag);
    let obj = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
