// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawWorkFile, WorkFile};
use crate::errors::Result;

/// Load a work file from a given path and return the raw `RawWorkFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawWorkFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "read work file");
    parse_raw(&contents)
}

/// Deserialize TOML text without validating it.
pub fn parse_raw(contents: &str) -> Result<RawWorkFile> {
    let raw: RawWorkFile = toml::from_str(contents)?;
    Ok(raw)
}

/// Parse and validate TOML text.
pub fn parse_str(contents: &str) -> Result<WorkFile> {
    WorkFile::try_from(parse_raw(contents)?)
}

/// Load a work file from path and run validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks schedule values and item durations, and converts every
///   `[item.<name>]` table into a `WorkItemSpec`.
///
/// Dependency references and cycles are checked when the `WorkGraph` is
/// built from the returned file.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<WorkFile> {
    let raw = load_from_path(&path)?;
    WorkFile::try_from(raw)
}

/// Default work file location: `Workgraph.toml` in the current directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Workgraph.toml")
}
