//! Graph abstraction and the adjacency-matrix undirected graph.
//!
//! The algorithms in this crate are written against [`Graph`], which exposes
//! only what they consume: directedness, the nodes in index order and the
//! distinct edges. [`UndirectedGraph`] is the shipped implementation.

mod adjacency_matrix;

use std::{fmt, hash::Hash};

use crate::{GraphEdge, GraphNode};

pub use self::adjacency_matrix::UndirectedGraph;

/// Read-only view of a graph consumed by the algorithms.
pub trait Graph {
    /// Label type carried by the graph's nodes.
    type Label: Eq + Hash + Clone + fmt::Debug;

    /// Returns `true` when the graph's edges are directed.
    fn is_directed(&self) -> bool;

    /// Returns the number of nodes.
    fn node_count(&self) -> usize;

    /// Returns the nodes in index order.
    fn nodes(&self) -> Vec<&GraphNode<Self::Label>>;

    /// Returns every edge exactly once, in a deterministic order.
    fn edges(&self) -> Vec<&GraphEdge<Self::Label>>;

    /// Returns the number of distinct edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Returns `true` when the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
