//! Provenance sidecars for CLI artifacts.
//!
//! Every file the CLI writes gets `<stem>.provenance.json` next to it, naming
//! the polygon/point files it was computed from and the parameters used.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Inputs and parameters behind one artifact.
pub struct Sidecar {
    params: Value,
    inputs: Vec<String>,
}

impl Sidecar {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn input(mut self, path: impl AsRef<Path>) -> Self {
        self.inputs.push(path.as_ref().display().to_string());
        self
    }

    pub fn inputs<I, P>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths.into_iter().fold(self, |acc, p| acc.input(p))
    }

    /// Write the sidecar for `artifact` and return its path.
    pub fn write(self, artifact: &Path) -> Result<PathBuf> {
        let path = artifact.with_extension("provenance.json");
        let doc = json!({
            "code_rev": current_git_rev(),
            "planar_version": planar::VERSION,
            "inputs": self.inputs,
            "params": self.params,
            "output": artifact.display().to_string(),
        });
        std::fs::write(&path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `GIT_COMMIT` when set, else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|r| !r.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("samples.csv");
        fs::write(&artifact, "").unwrap();
        let path = Sidecar::new(json!({})).write(&artifact).unwrap();
        assert_eq!(path, dir.path().join("samples.provenance.json"));
    }

    #[test]
    fn sidecar_records_inputs_params_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("classified.json");
        fs::write(&artifact, "{}").unwrap();
        let path = Sidecar::new(json!({"closed": true}))
            .input("zone.csv")
            .inputs(["hole_a.csv", "hole_b.csv"])
            .write(&artifact)
            .unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["inputs"], json!(["zone.csv", "hole_a.csv", "hole_b.csv"]));
        assert_eq!(doc["params"]["closed"], true);
        assert_eq!(doc["output"], artifact.display().to_string());
    }
}
