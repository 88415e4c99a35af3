// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkGraphError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Work item not found: {0}")]
    UnknownItem(String),

    #[error("Work item '{item}' depends on unknown item '{dependency}'")]
    UnknownDependency { item: String, dependency: String },

    #[error("Duplicate work item: {0}")]
    DuplicateItem(String),

    #[error("Cycle detected in work graph: {0}")]
    DagCycle(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WorkGraphError>;
