//! Shared test utilities for `graphkit-core`.

use graphkit_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{Graph, GraphEdge, GraphNode, UndirectedGraph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `GRAPHKIT_PBT_CASES` and
/// `GRAPHKIT_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Upper bound on generated graph sizes, honouring `GRAPHKIT_PBT_MAX_NODES`.
#[must_use]
pub(crate) fn max_generated_nodes(default_nodes: usize) -> usize {
    ProptestRunProfile::load(1, false).max_nodes_or(default_nodes)
}

/// Builds an undirected graph from labels and `(left, right, weight)` triples.
///
/// Panics when a triple references an unknown label, which only happens when
/// a test fixture itself is malformed.
pub(crate) fn weighted_graph(
    labels: &[&'static str],
    edges: &[(&'static str, &'static str, f64)],
) -> UndirectedGraph<&'static str> {
    let mut graph = UndirectedGraph::with_capacity(labels.len());
    for label in labels {
        graph.add_node(GraphNode::new(*label));
    }
    for &(left, right, weight) in edges {
        let edge = GraphEdge::weighted_undirected(GraphNode::new(left), GraphNode::new(right), weight);
        graph.add_edge(edge).expect("fixture endpoints must exist");
    }
    graph
}

/// Hand-built [`Graph`] for exercising paths `UndirectedGraph` cannot reach,
/// such as a directed input or an edge whose endpoint is not a node.
#[derive(Clone, Debug, Default)]
pub(crate) struct StubGraph {
    pub directed: bool,
    pub nodes: Vec<GraphNode<&'static str>>,
    pub edges: Vec<GraphEdge<&'static str>>,
}

impl StubGraph {
    /// Two nodes joined by one weighted directed edge.
    pub(crate) fn directed_pair() -> Self {
        Self {
            directed: true,
            nodes: vec![GraphNode::new("A"), GraphNode::new("B")],
            edges: vec![GraphEdge::weighted_directed(
                GraphNode::new("A"),
                GraphNode::new("B"),
                1.0,
            )],
        }
    }

    /// An undirected graph reporting an edge to a node it does not list.
    pub(crate) fn dangling_edge() -> Self {
        Self {
            directed: false,
            nodes: vec![GraphNode::new("A")],
            edges: vec![GraphEdge::weighted_undirected(
                GraphNode::new("A"),
                GraphNode::new("ghost"),
                1.0,
            )],
        }
    }
}

impl Graph for StubGraph {
    type Label = &'static str;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn nodes(&self) -> Vec<&GraphNode<&'static str>> {
        self.nodes.iter().collect()
    }

    fn edges(&self) -> Vec<&GraphEdge<&'static str>> {
        self.edges.iter().collect()
    }
}
