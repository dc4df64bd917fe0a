use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::env;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// Sidecar describing how an artifact was produced.
#[derive(Debug, Serialize)]
struct Provenance {
    code_rev: String,
    tool_version: &'static str,
    callsite: Callsite,
    command: &'static str,
    params: Value,
    outputs: Vec<String>,
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, command: &'static str, params: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = sidecar_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = Provenance {
        code_rev: code_rev(),
        tool_version: quickhull::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        command,
        params,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `dir/points.txt` -> `dir/points.provenance.json`; a bare directory gets `artifact.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    match artifact.file_name() {
        Some(_) => artifact.with_extension("provenance.json"),
        None => artifact.join("artifact.provenance.json"),
    }
}

fn non_empty(rev: &str) -> Option<String> {
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_owned())
}

/// Revision recorded in sidecars. Checks the `GIT_COMMIT` baked in at build time,
/// then the runtime `GIT_COMMIT`, then asks git; `"unknown"` outside a checkout.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .and_then(non_empty)
        .or_else(|| env::var("GIT_COMMIT").ok().as_deref().and_then(non_empty))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--verify", "HEAD"])
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    non_empty(std::str::from_utf8(&out.stdout).ok()?)
}
