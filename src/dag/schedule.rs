// src/dag/schedule.rs

//! Naive forward scheduling: start/end offsets in days for open items.
//!
//! This is not a critical-path computation. Every open item simply starts
//! when the last of its open dependencies ends.

use std::collections::{HashMap, VecDeque};

use serde::{Serialize, Serializer};
use tracing::{debug, trace, warn};

use crate::dag::graph::WorkGraph;
use crate::dag::item::{ItemId, ItemState};

/// Knobs for [`WorkGraph::calculate_times`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleOptions {
    /// Day at which items that cannot start right away begin: assigned or
    /// blocked items without dependencies, and items whose dependencies are
    /// all done.
    pub ready_delay: f64,
    /// Duration for items that do not specify one.
    pub default_duration: f64,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            ready_delay: 0.0,
            default_duration: 1.0,
        }
    }
}

/// Start and end of one item, in days from the schedule origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Computed spans for every item that is not done, in graph order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    entries: Vec<(String, Span)>,
    index: HashMap<String, usize>,
}

impl Schedule {
    pub fn get(&self, name: &str) -> Option<Span> {
        self.index.get(name).map(|&idx| self.entries[idx].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Span)> {
        self.entries.iter().map(|(name, span)| (name.as_str(), *span))
    }

    /// Latest end over all entries, or `None` for an empty schedule.
    pub fn finish(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|(_, span)| span.end)
            .reduce(f64::max)
    }

    fn push(&mut self, name: String, span: Span) {
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, span));
    }
}

impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl WorkGraph {
    /// Compute a start and end time for each item that is not done.
    ///
    /// - No dependencies: `Ready` items start at day 0, anything else at
    ///   `ready_delay`.
    /// - With dependencies: start at the latest end among open dependencies;
    ///   done dependencies impose nothing. If all are done, start at
    ///   `ready_delay`.
    /// - `end = start + duration`.
    pub fn calculate_times(&self, options: ScheduleOptions) -> Schedule {
        let order = self.open_topological_order();

        let mut spans: Vec<Option<Span>> = vec![None; self.len()];
        for id in order {
            let span = self.span_for(id, &spans, options);
            trace!(item = %self.item(id).name, start = span.start, end = span.end, "scheduled item");
            spans[id.index()] = Some(span);
        }

        let mut schedule = Schedule::default();
        for (item, span) in self.items().iter().zip(spans) {
            match span {
                Some(span) => schedule.push(item.name.clone(), span),
                None if !item.done => {
                    // Unreachable on an acyclic graph.
                    warn!(item = %item.name, "open item was never scheduled");
                }
                None => {}
            }
        }

        debug!(
            scheduled = schedule.len(),
            finish = schedule.finish(),
            "calculated schedule"
        );
        schedule
    }

    /// Kahn's algorithm over the open (not done) items.
    ///
    /// Only edges between two open items count towards in-degrees; an edge to
    /// a done item never holds anything up. Ties are released in insertion
    /// order.
    fn open_topological_order(&self) -> Vec<ItemId> {
        let n = self.len();
        let mut in_degree = vec![0usize; n];
        let mut dependents: Vec<Vec<ItemId>> = vec![Vec::new(); n];

        for (idx, item) in self.items().iter().enumerate() {
            if item.done {
                continue;
            }
            for &dep in self.dependency_ids(ItemId(idx)) {
                if !self.item(dep).done {
                    in_degree[idx] += 1;
                    dependents[dep.index()].push(ItemId(idx));
                }
            }
        }

        let mut queue: VecDeque<ItemId> = (0..n)
            .filter(|&idx| !self.items()[idx].done && in_degree[idx] == 0)
            .map(ItemId)
            .collect();
        let mut order = Vec::with_capacity(n);

        while let Some(id) = queue.pop_front() {
            order.push(id);
            for &next in &dependents[id.index()] {
                in_degree[next.index()] -= 1;
                if in_degree[next.index()] == 0 {
                    queue.push_back(next);
                }
            }
        }

        order
    }

    fn span_for(&self, id: ItemId, spans: &[Option<Span>], options: ScheduleOptions) -> Span {
        let item = self.item(id);
        let duration = item.effective_duration(options.default_duration);
        let deps = self.dependency_ids(id);

        let start = if deps.is_empty() {
            if item.state == ItemState::Ready {
                0.0
            } else {
                options.ready_delay
            }
        } else {
            deps.iter()
                .filter_map(|dep| spans[dep.index()].map(|span| span.end))
                .reduce(f64::max)
                .unwrap_or(options.ready_delay)
        };

        Span {
            start,
            end: start + duration,
        }
    }
}
