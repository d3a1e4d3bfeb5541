//! `<stem>.provenance.json` sidecars written next to every result file.

use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// What produced an artifact: the subcommand, its parameters and its sources.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            inputs: Vec::new(),
        }
    }

    /// Record an input file or an inline source such as `freeman:<chain>`.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    digiseg_version: &'static str,
    command: &'static str,
    callsite: Callsite,
    params: &'a Value,
    inputs: &'a [String],
    outputs: Vec<String>,
}

/// Write the sidecar of `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let caller = Location::caller();
    let path = sidecar_path(artifact);
    let sidecar = Sidecar {
        code_rev: code_rev(),
        digiseg_version: digiseg::VERSION,
        command: payload.command,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        params: &payload.params,
        inputs: &payload.inputs,
        outputs: vec![artifact.display().to_string()],
    };
    let bytes = serde_json::to_vec_pretty(&sidecar)?;
    fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `dir/segments.json` becomes `dir/segments.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit the binary was built from: `GIT_COMMIT` at build or run time, then
/// `git rev-parse HEAD`, then `"unknown"`.
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    from_env
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/run/segments.json")),
            Path::new("/tmp/run/segments.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("hull")),
            Path::new("hull.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_command_params_and_inputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("segments.json");
        fs::write(&artifact, "[]").unwrap();
        let payload = Payload::new("decompose", json!({"algo": "fuzzy", "thickness": 1.0}))
            .with_input("contour.json");
        let path = write_sidecar(&artifact, payload).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["command"], "decompose");
        assert_eq!(doc["params"]["thickness"], 1.0);
        assert_eq!(doc["inputs"], json!(["contour.json"]));
        assert_eq!(doc["outputs"][0], artifact.display().to_string());
        assert_eq!(doc["digiseg_version"], digiseg::VERSION);
        assert!(doc["callsite"]["file"]
            .as_str()
            .unwrap()
            .ends_with("provenance.rs"));
        assert!(!doc["code_rev"].as_str().unwrap().is_empty());
    }
}
