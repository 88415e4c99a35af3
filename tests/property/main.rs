use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use workgraph::{ItemState, ScheduleOptions, WorkGraph, WorkItemSpec};

// Strategy to generate a valid work graph.
// We ensure acyclicity by only allowing item N to depend on items 0..N-1.
// Duplicate dependencies are allowed on purpose.
fn graph_strategy(max_items: usize) -> impl Strategy<Value = WorkGraph> {
    (1..=max_items).prop_flat_map(|num_items| {
        let item_strat = (
            proptest::collection::vec(any::<usize>(), 0..4),
            any::<bool>(),
            any::<bool>(),
            proptest::option::of(0u8..5),
            any::<bool>(),
        );

        proptest::collection::vec(item_strat, num_items).prop_map(|raw_items| {
            let specs: Vec<(String, WorkItemSpec)> = raw_items
                .into_iter()
                .enumerate()
                .map(|(i, (raw_deps, done, assigned, duration, milestone))| {
                    let dependencies = if i == 0 {
                        Vec::new()
                    } else {
                        raw_deps
                            .into_iter()
                            .map(|d| format!("item_{}", d % i))
                            .collect()
                    };
                    let spec = WorkItemSpec {
                        dependencies,
                        done,
                        assigned,
                        duration: duration.map(f64::from),
                        milestone,
                    };
                    (format!("item_{i}"), spec)
                })
                .collect();
            WorkGraph::new(specs).expect("generated graph is acyclic and closed")
        })
    })
}

/// Names reachable from `name` by one or more edges, by plain traversal.
fn reachable(graph: &WorkGraph, name: &str) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut stack: Vec<&str> = graph.dependencies_of(name).iter().map(String::as_str).collect();
    while let Some(next) = stack.pop() {
        if seen.insert(next.to_string()) {
            stack.extend(graph.dependencies_of(next).iter().map(String::as_str));
        }
    }
    seen
}

proptest! {
    #[test]
    fn blocked_iff_open_unassigned_with_open_dependency(graph in graph_strategy(12)) {
        for item in graph.items() {
            let any_open_dep = item
                .dependencies
                .iter()
                .any(|dep| graph.get(dep).map(|d| d.state) != Some(ItemState::Done));
            let expect_blocked = !item.done && !item.assigned && any_open_dep;
            prop_assert_eq!(item.state == ItemState::Blocked, expect_blocked, "item {}", &item.name);
            prop_assert_eq!(item.state == ItemState::Done, item.done);
        }
    }

    #[test]
    fn subgraph_is_the_reachable_closure(graph in graph_strategy(12), pick in any::<usize>()) {
        let root = graph.items()[pick % graph.len()].name.clone();
        let sub = graph.subgraph(&root).unwrap();

        let mut expected = reachable(&graph, &root);
        expected.insert(root.clone());
        let actual: BTreeSet<String> = sub.names().map(str::to_string).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(sub.names().next(), Some(root.as_str()));

        let again = sub.subgraph(&root).unwrap();
        prop_assert_eq!(again.items(), sub.items());
    }

    #[test]
    fn reduction_preserves_reachability(graph in graph_strategy(12)) {
        let reduced = graph.transitive_reduction();
        for name in graph.names() {
            prop_assert_eq!(reachable(&reduced, name), reachable(&graph, name), "from {}", name);
        }
        prop_assert!(reduced.edge_count() <= graph.edge_count());
    }

    #[test]
    fn reduction_is_idempotent(graph in graph_strategy(12)) {
        let once = graph.transitive_reduction();
        let twice = once.transitive_reduction();
        for name in once.names() {
            prop_assert_eq!(once.dependencies_of(name), twice.dependencies_of(name));
        }
    }

    #[test]
    fn reverse_dependencies_match_direct_edges(graph in graph_strategy(12)) {
        for target in graph.names() {
            let expected: Vec<&str> = graph
                .items()
                .iter()
                .filter(|item| item.dependencies.iter().any(|d| d == target))
                .map(|item| item.name.as_str())
                .collect();
            prop_assert_eq!(graph.reverse_dependencies(target), expected);
        }
    }

    #[test]
    fn schedule_respects_open_dependencies(graph in graph_strategy(12), delay in 0u8..4) {
        let options = ScheduleOptions { ready_delay: f64::from(delay), default_duration: 1.0 };
        let schedule = graph.calculate_times(options);

        for item in graph.items() {
            let span = schedule.get(&item.name);
            if item.done {
                prop_assert!(span.is_none());
                continue;
            }
            let span = span.unwrap();
            prop_assert_eq!(span.end, span.start + item.effective_duration(1.0));

            let open_ends: Vec<f64> = item
                .dependencies
                .iter()
                .filter_map(|dep| schedule.get(dep).map(|s| s.end))
                .collect();
            let expected_start = match open_ends.iter().copied().reduce(f64::max) {
                Some(latest) => latest,
                None if item.dependencies.is_empty() && item.state == ItemState::Ready => 0.0,
                None => options.ready_delay,
            };
            prop_assert_eq!(span.start, expected_start, "item {}", &item.name);
        }
    }

    #[test]
    fn distances_follow_the_minimum_parent_law(graph in graph_strategy(12), pick in any::<usize>()) {
        let root = graph.items()[pick % graph.len()].name.clone();
        let distances = graph.root_distances(&root).unwrap();

        prop_assert_eq!(distances.get(&root), Some(&0));

        let mut expected_keys = reachable(&graph, &root);
        expected_keys.insert(root.clone());
        let keys: BTreeSet<String> = distances.keys().cloned().collect();
        prop_assert_eq!(keys, expected_keys);

        for (name, &distance) in &distances {
            if *name == root {
                continue;
            }
            let parents: HashSet<&str> = graph
                .reverse_dependencies(name)
                .into_iter()
                .filter(|parent| distances.contains_key(*parent))
                .collect();
            let best = parents.iter().filter_map(|p| distances.get(*p)).min().copied();
            prop_assert_eq!(Some(distance), best.map(|d| d + 1), "item {}", name);
        }
    }
}
