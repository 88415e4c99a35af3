// src/dag/reduction.rs

//! Transitive reduction for display.
//!
//! If `A -> B -> C` and also `A -> C`, the direct edge `A -> C` adds nothing
//! to reachability. Dropping such edges gives a much simpler, almost
//! tree-shaped picture of the same dependency structure.

use std::collections::HashSet;

use fixedbitset::FixedBitSet;
use tracing::{debug, trace};

use crate::dag::graph::WorkGraph;
use crate::dag::item::ItemId;

/// Ancestor -> descendant relation over the items of one graph.
#[derive(Debug, Clone)]
pub struct Reachability {
    /// `rows[a]` holds every item reachable from `a` by one or more edges.
    rows: Vec<FixedBitSet>,
}

impl Reachability {
    /// Whether `to` can be reached from `from` via at least one edge.
    pub fn reaches(&self, from: ItemId, to: ItemId) -> bool {
        self.rows[from.index()].contains(to.index())
    }

    /// Ids reachable from `from`, in ascending id order.
    pub fn descendants(&self, from: ItemId) -> impl Iterator<Item = ItemId> + '_ {
        self.rows[from.index()].ones().map(ItemId)
    }

    /// Number of (ancestor, descendant) pairs.
    pub fn pair_count(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones(..)).sum()
    }
}

impl WorkGraph {
    /// Compute the full reachability relation.
    ///
    /// Iterative post-order DFS with an explicit stack of
    /// `(item, next dependency)` frames. A finished item's row is the union of
    /// its direct dependencies and their rows, so each item is expanded once
    /// no matter how many paths lead to it.
    pub fn reachability(&self) -> Reachability {
        let n = self.len();
        let mut rows = vec![FixedBitSet::with_capacity(n); n];
        let mut finished = vec![false; n];
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in 0..n {
            if finished[start] {
                continue;
            }
            stack.push((start, 0));

            while let Some(&(node, cursor)) = stack.last() {
                let deps = self.dependency_ids(ItemId(node));
                if let Some(dep) = deps.get(cursor) {
                    let top = stack.len() - 1;
                    stack[top].1 += 1;
                    if !finished[dep.index()] {
                        stack.push((dep.index(), 0));
                    }
                    continue;
                }

                stack.pop();
                let mut row = FixedBitSet::with_capacity(n);
                for dep in deps {
                    row.insert(dep.index());
                    row.union_with(&rows[dep.index()]);
                }
                rows[node] = row;
                finished[node] = true;
            }
        }

        Reachability { rows }
    }

    /// New graph with every redundant "shortcut" edge removed.
    ///
    /// An edge `item -> dep1` is dropped when another direct dependency
    /// `dep2` of the same item reaches `dep1`. All copies of a dropped name
    /// go; the remaining dependencies keep their order. States are derived
    /// again against the reduced edges.
    pub fn transitive_reduction(&self) -> WorkGraph {
        let reach = self.reachability();

        let mut specs = Vec::with_capacity(self.len());
        let mut deps = Vec::with_capacity(self.len());
        let mut removed = 0usize;

        for (idx, item) in self.items().iter().enumerate() {
            let direct = self.dependency_ids(ItemId(idx));

            let mut omit: HashSet<ItemId> = HashSet::new();
            for &dep1 in direct {
                for &dep2 in direct {
                    // item -> dep2 --...--> dep1, so item -> dep1 is implied.
                    if dep1 != dep2 && reach.reaches(dep2, dep1) {
                        omit.insert(dep1);
                    }
                }
            }

            let mut spec = item.to_spec();
            let mut kept = Vec::with_capacity(direct.len());
            spec.dependencies.clear();
            for (name, &dep) in item.dependencies.iter().zip(direct) {
                if omit.contains(&dep) {
                    trace!(item = %item.name, dependency = %name, "dropping redundant edge");
                    removed += 1;
                } else {
                    spec.dependencies.push(name.clone());
                    kept.push(dep);
                }
            }

            specs.push(spec);
            deps.push(kept);
        }

        debug!(
            removed,
            remaining = deps.iter().map(Vec::len).sum::<usize>(),
            "computed transitive reduction"
        );

        self.with_edges(specs, deps)
    }
}
