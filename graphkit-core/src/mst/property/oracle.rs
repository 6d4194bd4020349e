//! Sequential Kruskal oracle for MST property verification.
//!
//! A deliberately plain implementation over index arrays: `sort_by` instead
//! of the heap sort, and a parent vector instead of the disjoint-set forest.

use crate::UndirectedGraph;

use super::helpers::{endpoints, find_root, weight_of};

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the MST/forest.
    pub total_weight: f64,
    /// Number of edges in the MST/forest.
    pub edge_count: usize,
    /// Number of connected components after MST construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest of `graph` with sequential Kruskal.
pub(super) fn sequential_kruskal(graph: &UndirectedGraph<usize>) -> SequentialMstResult {
    let node_count = graph.node_count();
    let mut edges: Vec<(f64, usize, usize)> = graph
        .edges()
        .into_iter()
        .map(|edge| {
            let (source, target) = endpoints(edge);
            (weight_of(edge), source, target)
        })
        .collect();
    edges.sort_by(|left, right| left.0.total_cmp(&right.0));

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut result = SequentialMstResult {
        total_weight: 0.0,
        edge_count: 0,
        component_count: node_count,
    };
    for (weight, source, target) in edges {
        let left = find_root(&mut parent, source);
        let right = find_root(&mut parent, target);
        if left != right {
            parent[right] = left;
            result.total_weight += weight;
            result.edge_count += 1;
            result.component_count -= 1;
        }
    }
    result
}
