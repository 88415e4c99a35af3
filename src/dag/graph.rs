// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::{debug, trace};

use crate::dag::item::{ItemId, WorkItem, WorkItemSpec};
use crate::dag::state::derive_states;
use crate::errors::{Result, WorkGraphError};

/// Normalized set of work items connected by dependency edges.
///
/// Items live in an arena in insertion order. Dependency names are resolved to
/// [`ItemId`]s once, during construction, so every traversal works on indices
/// and never fails a lookup. Construction also rejects cycles, which makes
/// every operation on a `WorkGraph` terminate.
#[derive(Debug, Clone)]
pub struct WorkGraph {
    items: Vec<WorkItem>,
    by_name: HashMap<String, ItemId>,
    /// Resolved `dependencies`, parallel to `items` (duplicates kept).
    deps: Vec<Vec<ItemId>>,
}

impl WorkGraph {
    /// Build a graph from `(name, spec)` pairs, in the order given.
    ///
    /// Fails if a name appears twice, if a dependency names an item that is
    /// not part of the input, or if the dependency edges form a cycle.
    pub fn new<I, S>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, WorkItemSpec)>,
        S: Into<String>,
    {
        let (names, specs): (Vec<String>, Vec<WorkItemSpec>) = specs
            .into_iter()
            .map(|(name, spec)| (name.into(), spec))
            .unzip();

        let mut by_name = HashMap::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            if by_name.insert(name.clone(), ItemId(idx)).is_some() {
                return Err(WorkGraphError::DuplicateItem(name.clone()));
            }
        }

        let mut deps = Vec::with_capacity(specs.len());
        for (name, spec) in names.iter().zip(&specs) {
            let resolved = spec
                .dependencies
                .iter()
                .map(|dep| {
                    by_name
                        .get(dep)
                        .copied()
                        .ok_or_else(|| WorkGraphError::UnknownDependency {
                            item: name.clone(),
                            dependency: dep.clone(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            deps.push(resolved);
        }

        ensure_acyclic(&names, &deps)?;

        Ok(Self::assemble(names, specs, by_name, deps))
    }

    /// Rebuild a graph over the same nodes with a filtered edge set.
    ///
    /// `deps[i]` must be a sub-list of this graph's `deps[i]`, which keeps
    /// the result acyclic and every id valid.
    pub(crate) fn with_edges(&self, specs: Vec<WorkItemSpec>, deps: Vec<Vec<ItemId>>) -> Self {
        let names = self.items.iter().map(|item| item.name.clone()).collect();
        Self::assemble(names, specs, self.by_name.clone(), deps)
    }

    fn assemble(
        names: Vec<String>,
        specs: Vec<WorkItemSpec>,
        by_name: HashMap<String, ItemId>,
        deps: Vec<Vec<ItemId>>,
    ) -> Self {
        let states = derive_states(&specs, &deps);

        let items: Vec<WorkItem> = names
            .into_iter()
            .zip(specs)
            .zip(states)
            .map(|((name, spec), state)| {
                trace!(item = %name, %state, "derived item state");
                WorkItem::from_spec(name, spec, state)
            })
            .collect();

        debug!(
            items = items.len(),
            edges = deps.iter().map(Vec::len).sum::<usize>(),
            "constructed work graph"
        );

        Self {
            items,
            by_name,
            deps,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of dependency edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.deps.iter().map(Vec::len).sum()
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[WorkItem] {
        &self.items
    }

    /// All item names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&WorkItem> {
        self.by_name.get(name).map(|id| &self.items[id.index()])
    }

    pub fn id_of(&self, name: &str) -> Option<ItemId> {
        self.by_name.get(name).copied()
    }

    /// Item for an id issued by this graph.
    pub fn item(&self, id: ItemId) -> &WorkItem {
        &self.items[id.index()]
    }

    /// Immediate dependencies of an item (its `dependencies` list).
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.get(name)
            .map(|item| item.dependencies.as_slice())
            .unwrap_or(&[])
    }

    /// Resolved dependency ids of an item, parallel to its `dependencies`.
    pub fn dependency_ids(&self, id: ItemId) -> &[ItemId] {
        &self.deps[id.index()]
    }

    /// Look up a name that the caller requires to exist.
    pub(crate) fn require(&self, name: &str) -> Result<ItemId> {
        self.id_of(name)
            .ok_or_else(|| WorkGraphError::UnknownItem(name.to_string()))
    }

    /// Raw specs of every item, in insertion order.
    pub fn to_specs(&self) -> Vec<(String, WorkItemSpec)> {
        self.items
            .iter()
            .map(|item| (item.name.clone(), item.to_spec()))
            .collect()
    }
}

/// Reject dependency cycles, including self-dependencies.
///
/// Edge direction: dependency -> dependent.
fn ensure_acyclic(names: &[String], deps: &[Vec<ItemId>]) -> Result<()> {
    let mut graph: DiGraphMap<usize, ()> = DiGraphMap::new();

    for idx in 0..names.len() {
        graph.add_node(idx);
    }

    for (idx, item_deps) in deps.iter().enumerate() {
        for dep in item_deps {
            graph.add_edge(dep.index(), idx, ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(WorkGraphError::DagCycle(format!(
            "cycle detected in work graph involving item '{}'",
            names[cycle.node_id()]
        ))),
    }
}
