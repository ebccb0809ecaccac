//! # zka-cli — Command Handlers
//!
//! One module per subcommand, each exposing an `Args` struct and a
//! `run_*` handler returning the process exit code. The binary entry
//! point in `main.rs` parses and dispatches.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;

pub mod activity;
pub mod decode;
pub mod issue;
pub mod prove;
pub mod records;

/// Read a JSON document from disk.
pub(crate) fn read_json(path: &Path) -> anyhow::Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}
