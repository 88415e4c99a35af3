// src/dag/subgraph.rs

//! Restriction of a graph to one item's dependency closure.

use tracing::debug;

use crate::dag::graph::WorkGraph;
use crate::errors::Result;

impl WorkGraph {
    /// New graph holding `name` and everything it transitively depends on.
    ///
    /// Items appear in depth-first pre-order from `name`, following each
    /// item's dependencies in listed order. States are derived again for the
    /// new graph; they match the source graph because every dependency of a
    /// kept item is kept as well.
    pub fn subgraph(&self, name: &str) -> Result<WorkGraph> {
        let root = self.require(name)?;

        let mut visited = vec![false; self.len()];
        let mut order = Vec::new();
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if visited[id.index()] {
                continue;
            }
            visited[id.index()] = true;
            order.push(id);

            // Reverse so the first listed dependency is expanded first.
            stack.extend(
                self.dependency_ids(id)
                    .iter()
                    .rev()
                    .filter(|dep| !visited[dep.index()]),
            );
        }

        debug!(root = %name, items = order.len(), "extracted subgraph");

        WorkGraph::new(order.into_iter().map(|id| {
            let item = self.item(id);
            (item.name.clone(), item.to_spec())
        }))
    }
}
