#![allow(dead_code)]

use workgraph::{WorkGraph, WorkItemSpec};
use workgraph::errors::Result;

/// Builder for `WorkGraph` to simplify test setup.
///
/// Items keep the order in which they are added.
pub struct WorkGraphBuilder {
    items: Vec<(String, WorkItemSpec)>,
}

impl WorkGraphBuilder {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_item(mut self, name: &str, item: WorkItemSpec) -> Self {
        self.items.push((name.to_string(), item));
        self
    }

    /// Shorthand for an item that only has dependencies.
    pub fn with_deps(self, name: &str, deps: &[&str]) -> Self {
        let mut item = ItemBuilder::new();
        for dep in deps {
            item = item.after(dep);
        }
        self.with_item(name, item.build())
    }

    pub fn specs(&self) -> &[(String, WorkItemSpec)] {
        &self.items
    }

    pub fn try_build(self) -> Result<WorkGraph> {
        WorkGraph::new(self.items)
    }

    pub fn build(self) -> WorkGraph {
        self.try_build().expect("Failed to build valid work graph from builder")
    }
}

impl Default for WorkGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `WorkItemSpec`.
pub struct ItemBuilder {
    item: WorkItemSpec,
}

impl ItemBuilder {
    pub fn new() -> Self {
        Self {
            item: WorkItemSpec {
                dependencies: vec![],
                done: false,
                assigned: false,
                duration: None,
                milestone: false,
            },
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.item.dependencies.push(dep.to_string());
        self
    }

    pub fn done(mut self) -> Self {
        self.item.done = true;
        self
    }

    pub fn assigned(mut self) -> Self {
        self.item.assigned = true;
        self
    }

    pub fn duration(mut self, days: f64) -> Self {
        self.item.duration = Some(days);
        self
    }

    pub fn milestone(mut self) -> Self {
        self.item.milestone = true;
        self
    }

    pub fn build(self) -> WorkItemSpec {
        self.item
    }
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}
