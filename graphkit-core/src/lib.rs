//! Graphkit core library.
//!
//! Provides a disjoint-set forest with path compression and union by rank,
//! an undirected graph stored as an adjacency matrix, and two algorithms
//! built on the forest: Kruskal's minimum spanning forest and connected
//! components. The algorithms are generic over the [`Graph`] trait.
//!
//! ```
//! use graphkit_core::{UndirectedGraph, connected_components, kruskal_msp};
//!
//! let mut graph = UndirectedGraph::new();
//! for label in ["A", "B", "C", "D"] {
//!     graph.add_node_with_label(label);
//! }
//! graph.add_weighted_edge_between("A", "B", 1.0)?;
//! graph.add_weighted_edge_between("C", "D", 2.0)?;
//!
//! assert_eq!(connected_components(&graph)?.len(), 2);
//! assert_eq!(kruskal_msp(&graph)?.component_count(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod components;
mod disjoint_set;
mod edge;
mod error;
mod graph;
mod mst;
mod node;
#[cfg(test)]
mod test_utils;

pub use crate::{
    components::{ConnectedComponents, ConnectedComponentsComputer, connected_components},
    disjoint_set::DisjointSetForest,
    edge::GraphEdge,
    error::{
        ComponentsError, ComponentsErrorCode, DisjointSetError, DisjointSetErrorCode, ErrorKind,
        GraphError, GraphErrorCode, MstError, MstErrorCode, Result,
    },
    graph::{Graph, UndirectedGraph},
    mst::{KruskalMsp, MinimumSpanningForest, kruskal_msp},
    node::GraphNode,
};
