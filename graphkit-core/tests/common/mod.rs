//! Fixtures shared by the integration tests.

use graphkit_core::{GraphNode, UndirectedGraph};

/// Builds a graph from labels and `(left, right, weight)` triples.
#[must_use]
pub fn weighted_graph(
    labels: &[&'static str],
    edges: &[(&'static str, &'static str, f64)],
) -> UndirectedGraph<&'static str> {
    let mut graph = UndirectedGraph::new();
    for label in labels {
        graph.add_node(GraphNode::new(*label));
    }
    for &(left, right, weight) in edges {
        graph
            .add_weighted_edge_between(left, right, weight)
            .expect("fixture endpoints must exist");
    }
    graph
}

/// Shorthand for a node labelled `label`.
#[must_use]
pub const fn node(label: &'static str) -> GraphNode<&'static str> {
    GraphNode::new(label)
}
