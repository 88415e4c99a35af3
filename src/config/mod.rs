// src/config/mod.rs

//! Work file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a work file from disk (`loader.rs`).
//! - Validate schedule values and item records (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, parse_str};
pub use model::{RawWorkFile, ScheduleSection, WorkFile};
