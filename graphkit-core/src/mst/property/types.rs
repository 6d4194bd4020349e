//! Type definitions for MST property-based tests.

use test_strategy::Arbitrary;

use crate::{GraphNode, UndirectedGraph};

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation. Weights
/// are small integers stored as `f64`, so totals are exact and ties are
/// common.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Edge weights drawn from a wide range, so most weights differ.
    #[weight(2)]
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    #[weight(3)]
    ManyIdentical,
    /// Random spanning tree plus roughly `0.5n` to `n` extra edges.
    #[weight(2)]
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    #[weight(2)]
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    #[weight(2)]
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Captures the generated graph and the weight distribution used to build it,
/// providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Graph whose labels are the node indices.
    pub graph: UndirectedGraph<usize>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds a fixture with nodes `0..node_count` and the given
    /// `(source, target, weight)` edges. A pair that is already joined keeps
    /// its first edge, matching the graph's one-edge-per-pair rule.
    pub(super) fn new(
        node_count: usize,
        edges: &[(usize, usize, u32)],
        distribution: WeightDistribution,
    ) -> Self {
        let mut graph = UndirectedGraph::with_capacity(node_count);
        for label in 0..node_count {
            graph.add_node(GraphNode::new(label));
        }
        for &(source, target, weight) in edges {
            let _added = graph
                .add_weighted_edge_between(source, target, f64::from(weight))
                .expect("generated endpoints are in range");
        }
        Self {
            graph,
            distribution,
        }
    }

    /// Returns a short context string for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.graph.node_count(),
            self.graph.edge_count(),
        )
    }
}
