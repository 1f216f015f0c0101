use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to every fingerprint file.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value, tag: Option<String>) -> Self {
        Self { params, tag }
    }
}

/// JSON block describing the code revision and library version plus the given payload.
pub fn document(payload: &Payload, outputs: &[String]) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "polymatch_version": polymatch::VERSION,
        "tag": payload.tag,
        "params": payload.params,
        "outputs": outputs,
    })
}

/// Write `<artifact-stem>.provenance.json` containing the git commit, callsite, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = document(&payload, &[artifact.to_string_lossy().into_owned()]);
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `<dir>/<stem>.provenance.json` next to `artifact`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name: OsString = artifact
        .file_stem()
        .map(OsString::from)
        .unwrap_or_else(|| "fingerprints".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit recorded in provenance: `$GIT_COMMIT` when set, else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .filter(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn git_rev_prefers_environment() {
        // Only the non-empty branch is stable across machines.
        if let Ok(rev) = std::env::var("GIT_COMMIT") {
            if !rev.is_empty() {
                assert_eq!(current_git_rev(), rev);
            }
        }
        assert!(!current_git_rev().is_empty());
    }

    #[test]
    fn provenance_path_without_stem_uses_default_name() {
        let derived = provenance_path(Path::new("/"));
        assert_eq!(derived.file_name().unwrap(), "fingerprints.provenance.json");
    }

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/shapes.json");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/shapes.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_outputs_and_tag() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("fps.json");
        fs::write(&artifact, "[]").unwrap();
        let payload = Payload::new(json!({"tie_eps": 0.01}), Some("nightly".into()));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["tag"], "nightly");
        assert_eq!(parsed["params"]["tie_eps"], 0.01);
        assert!(parsed["callsite"]["line"].as_u64().is_some());
    }
}
