// src/config/model.rs

use serde::Deserialize;

use crate::dag::{ScheduleOptions, WorkGraph, WorkItemSpec};
use crate::errors::Result;

/// Work file exactly as read from TOML, before validation.
///
/// ```toml
/// [schedule]
/// ready_delay = 2
/// default_duration = 1
///
/// [item.design]
/// duration = 3
/// milestone = true
///
/// [item.build]
/// dependencies = ["design"]
/// assigned = true
/// ```
///
/// Both sections are optional at the TOML level; validation requires at
/// least one item.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWorkFile {
    /// Scheduling defaults from `[schedule]`.
    #[serde(default)]
    pub schedule: ScheduleSection,

    /// All items from `[item.<name>]`, in document order.
    ///
    /// Kept as a table so the order survives deserialization; each value is
    /// converted to a [`WorkItemSpec`] during validation.
    #[serde(default)]
    pub item: toml::Table,
}

/// `[schedule]` section.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScheduleSection {
    /// Day at which items that cannot start right away begin.
    #[serde(default)]
    pub ready_delay: f64,

    /// Duration in days for items without their own `duration`.
    #[serde(default = "default_duration")]
    pub default_duration: f64,
}

fn default_duration() -> f64 {
    1.0
}

impl Default for ScheduleSection {
    fn default() -> Self {
        Self {
            ready_delay: 0.0,
            default_duration: default_duration(),
        }
    }
}

impl ScheduleSection {
    pub fn options(&self) -> ScheduleOptions {
        ScheduleOptions {
            ready_delay: self.ready_delay,
            default_duration: self.default_duration,
        }
    }
}

/// Validated work file.
///
/// Items keep their document order, which becomes the insertion order of
/// the graph built from them.
#[derive(Debug, Clone)]
pub struct WorkFile {
    pub schedule: ScheduleSection,
    pub items: Vec<(String, WorkItemSpec)>,
}

impl WorkFile {
    /// Only [`TryFrom<RawWorkFile>`] should call this.
    pub(crate) fn new_unchecked(
        schedule: ScheduleSection,
        items: Vec<(String, WorkItemSpec)>,
    ) -> Self {
        Self { schedule, items }
    }

    /// Build the work graph described by this file.
    pub fn graph(&self) -> Result<WorkGraph> {
        WorkGraph::new(self.items.iter().cloned())
    }
}
