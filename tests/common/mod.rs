#![allow(dead_code)]

use workgraph::WorkGraph;

pub use workgraph_test_utils::init_tracing;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Item names of a graph, in insertion order.
pub fn names(graph: &WorkGraph) -> Vec<&str> {
    graph.names().collect()
}

/// `(name, dependencies)` for every item, in insertion order.
pub fn edges(graph: &WorkGraph) -> Vec<(String, Vec<String>)> {
    graph
        .items()
        .iter()
        .map(|item| (item.name.clone(), item.dependencies.clone()))
        .collect()
}
