// src/dag/item.rs

//! Work item records: the raw input shape and the normalized node.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of an item inside the arena of the [`WorkGraph`](crate::dag::WorkGraph)
/// that produced it. Ids are not meaningful across graph instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub(crate) usize);

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Derived classification of a work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemState {
    Done,
    /// Assigned and not done. Says nothing about the dependencies.
    InProgress,
    /// Not assigned, every dependency done.
    Ready,
    /// Not assigned, at least one dependency not done.
    Blocked,
}

impl ItemState {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemState::Done => "done",
            ItemState::InProgress => "inProgress",
            ItemState::Ready => "ready",
            ItemState::Blocked => "blocked",
        }
    }
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partial item data as supplied by a loader.
///
/// Mirrors a `[item.<name>]` table:
///
/// ```toml
/// [item.build]
/// dependencies = ["design"]
/// assigned = true
/// duration = 2.5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WorkItemSpec {
    /// Names of the items this one waits for.
    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub done: bool,

    #[serde(default)]
    pub assigned: bool,

    /// Duration in days; `None` falls back to the schedule default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    #[serde(default)]
    pub milestone: bool,
}

/// A normalized node of a work graph.
///
/// Only a [`WorkGraph`](crate::dag::WorkGraph) creates these, so `state` is
/// always consistent with the graph the item lives in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkItem {
    pub name: String,
    pub dependencies: Vec<String>,
    pub done: bool,
    pub assigned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub milestone: bool,
    pub state: ItemState,
}

impl WorkItem {
    pub(crate) fn from_spec(name: String, spec: WorkItemSpec, state: ItemState) -> Self {
        Self {
            name,
            dependencies: spec.dependencies,
            done: spec.done,
            assigned: spec.assigned,
            duration: spec.duration,
            milestone: spec.milestone,
            state,
        }
    }

    /// Copy of the externally supplied fields, without the derived state.
    pub fn to_spec(&self) -> WorkItemSpec {
        WorkItemSpec {
            dependencies: self.dependencies.clone(),
            done: self.done,
            assigned: self.assigned,
            duration: self.duration,
            milestone: self.milestone,
        }
    }

    /// Own duration, or `default_duration` when none was given.
    pub fn effective_duration(&self, default_duration: f64) -> f64 {
        self.duration.unwrap_or(default_duration)
    }
}
