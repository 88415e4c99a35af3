// src/dag/mod.rs

//! Work graph representation and the algorithms over it.
//!
//! - [`item`] holds the raw input record, the normalized node and its state.
//! - [`graph`] builds and indexes a [`WorkGraph`] (validation, cycle check).
//! - [`state`] derives each item's [`ItemState`].
//! - [`subgraph`] restricts a graph to one item's dependency closure.
//! - [`reduction`] computes reachability and the transitive reduction.
//! - [`schedule`] assigns naive start/end times to open items.
//! - [`query`] answers distance, reverse-dependency and milestone lookups.

pub mod graph;
pub mod item;
pub mod query;
pub mod reduction;
pub mod schedule;
pub mod state;
pub mod subgraph;

pub use graph::WorkGraph;
pub use item::{ItemId, ItemState, WorkItem, WorkItemSpec};
pub use reduction::Reachability;
pub use schedule::{Schedule, ScheduleOptions, Span};
