// src/dag/query.rs

//! Auxiliary lookups: hop distances, reverse dependencies, milestones.

use std::collections::{BTreeMap, VecDeque};

use crate::dag::graph::WorkGraph;
use crate::dag::item::WorkItem;
use crate::errors::Result;

impl WorkGraph {
    /// Minimum number of dependency edges from `root` to every item it
    /// reaches. `root` itself is at distance 0.
    ///
    /// Breadth-first, so the first visit of an item is along a shortest path.
    pub fn root_distances(&self, root: &str) -> Result<BTreeMap<String, usize>> {
        let root = self.require(root)?;

        let mut distances: Vec<Option<usize>> = vec![None; self.len()];
        distances[root.index()] = Some(0);

        let mut queue = VecDeque::from([(root, 0usize)]);
        while let Some((id, distance)) = queue.pop_front() {
            for &dep in self.dependency_ids(id) {
                if distances[dep.index()].is_none() {
                    distances[dep.index()] = Some(distance + 1);
                    queue.push_back((dep, distance + 1));
                }
            }
        }

        Ok(self
            .items()
            .iter()
            .zip(distances)
            .filter_map(|(item, distance)| distance.map(|d| (item.name.clone(), d)))
            .collect())
    }

    /// Items that list `name` directly in their dependencies, in graph order.
    ///
    /// Each item appears once even if it lists `name` several times. A name
    /// that is not in the graph has no reverse dependencies.
    pub fn reverse_dependencies(&self, name: &str) -> Vec<&str> {
        self.items()
            .iter()
            .filter(|item| item.dependencies.iter().any(|dep| dep == name))
            .map(|item| item.name.as_str())
            .collect()
    }

    /// Items flagged as milestones, in insertion order.
    pub fn milestones(&self) -> Vec<&WorkItem> {
        self.items().iter().filter(|item| item.milestone).collect()
    }
}
