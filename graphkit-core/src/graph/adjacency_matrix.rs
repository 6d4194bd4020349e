//! Undirected graph stored as a resizable adjacency matrix.
//!
//! Nodes are numbered `0..node_count` in insertion order. Cell `(i, j)` holds
//! the edge joining nodes `i` and `j`, or `None`; every edge is written to
//! both `(i, j)` and `(j, i)`. Adding a node grows every row by one column and
//! appends one row. Removing a node drops its row and column and shifts every
//! higher index down by one, so indices are not stable across removals.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
    iter,
};

use tracing::trace;

use crate::{
    GraphEdge, GraphNode,
    error::{GraphError, Result, describe},
};

use super::Graph;

/// An undirected graph backed by an adjacency matrix.
///
/// # Examples
/// ```
/// use graphkit_core::{GraphEdge, GraphNode, UndirectedGraph};
///
/// let mut graph = UndirectedGraph::new();
/// assert!(graph.add_node(GraphNode::new("A")));
/// assert!(graph.add_node(GraphNode::new("B")));
/// let edge = GraphEdge::weighted_undirected(GraphNode::new("A"), GraphNode::new("B"), 1.0);
/// assert!(graph.add_edge(edge.clone())?);
/// assert!(graph.contains_edge(&edge)?);
/// assert_eq!(graph.node_index_of(&"B")?, 1);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), graphkit_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct UndirectedGraph<L> {
    nodes: Vec<GraphNode<L>>,
    index: HashMap<GraphNode<L>, usize>,
    matrix: Vec<Vec<Option<GraphEdge<L>>>>,
}

impl<L> Default for UndirectedGraph<L> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            matrix: Vec::new(),
        }
    }
}

impl<L> UndirectedGraph<L> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes before the node
    /// list and row list reallocate.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            matrix: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Always `false`.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        false
    }

    /// Returns the nodes in index order.
    #[must_use]
    pub fn nodes(&self) -> &[GraphNode<L>] {
        &self.nodes
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.matrix.clear();
    }

    /// Returns every edge exactly once by scanning the upper triangle of the
    /// matrix (diagonal included) in row-major order.
    #[must_use]
    pub fn edges(&self) -> Vec<&GraphEdge<L>> {
        self.upper_triangle().collect()
    }

    fn upper_triangle(&self) -> impl Iterator<Item = &GraphEdge<L>> {
        self.matrix
            .iter()
            .enumerate()
            .flat_map(|(row_index, row)| row.iter().skip(row_index).flatten())
    }

    /// Returns the number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.upper_triangle().count()
    }

    /// Returns the node stored at `index`.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] when `index >= node_count()`.
    pub fn node_at_index(&self, index: usize) -> Result<&GraphNode<L>> {
        self.nodes.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            node_count: self.nodes.len(),
        })
    }

    /// Returns the edge stored in cell `(first, second)`, if any.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] when either index is outside
    /// `[0, node_count())`.
    pub fn edge_at_node_indexes(&self, first: usize, second: usize) -> Result<Option<&GraphEdge<L>>> {
        self.check_index(first)?;
        self.check_index(second)?;
        Ok(self.matrix[first][second].as_ref())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                node_count: self.nodes.len(),
            })
        }
    }

    /// Always fails: predecessors are only defined for directed graphs.
    ///
    /// # Errors
    /// Always returns [`GraphError::Unsupported`].
    pub fn predecessor_nodes_of(&self, _node: &GraphNode<L>) -> Result<HashSet<&GraphNode<L>>> {
        Err(GraphError::Unsupported {
            operation: "predecessor_nodes_of",
        })
    }

    /// Always fails: ingoing edges are only defined for directed graphs.
    ///
    /// # Errors
    /// Always returns [`GraphError::Unsupported`].
    pub fn ingoing_edges_of(&self, _node: &GraphNode<L>) -> Result<HashSet<&GraphEdge<L>>> {
        Err(GraphError::Unsupported {
            operation: "ingoing_edges_of",
        })
    }
}

impl<L> UndirectedGraph<L>
where
    L: Eq + Hash + Clone + fmt::Debug,
{
    /// Adds `node` with the next free index.
    ///
    /// Returns `false` without touching the graph when an equal node is
    /// already present.
    pub fn add_node(&mut self, node: GraphNode<L>) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        let position = self.nodes.len();
        for row in &mut self.matrix {
            row.push(None);
        }
        self.matrix
            .push(iter::repeat_with(|| None).take(position + 1).collect());
        self.index.insert(node.clone(), position);
        self.nodes.push(node);
        true
    }

    /// Adds a node carrying `label`; see [`Self::add_node`].
    pub fn add_node_with_label(&mut self, label: L) -> bool {
        self.add_node(GraphNode::new(label))
    }

    /// Removes `node` together with its row and column.
    ///
    /// Every node whose index was greater than the removed one moves down by
    /// one. Returns `false` when the node is absent.
    pub fn remove_node(&mut self, node: &GraphNode<L>) -> bool {
        let Some(removed) = self.index.remove(node) else {
            return false;
        };
        self.matrix.remove(removed);
        for row in &mut self.matrix {
            row.remove(removed);
        }
        self.nodes.remove(removed);
        for position in self.index.values_mut() {
            if *position > removed {
                *position -= 1;
            }
        }
        trace!(
            index = removed,
            renumbered = self.nodes.len() - removed,
            "node removed from adjacency matrix"
        );
        true
    }

    /// Removes the node stored at `index` and returns it.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] when `index >= node_count()`.
    pub fn remove_node_at_index(&mut self, index: usize) -> Result<GraphNode<L>> {
        let node = self.node_at_index(index)?.clone();
        self.remove_node(&node);
        Ok(node)
    }

    /// Returns `true` when `node` belongs to the graph.
    #[must_use]
    pub fn contains_node(&self, node: &GraphNode<L>) -> bool {
        self.index.contains_key(node)
    }

    /// Returns the node carrying `label`, if any.
    #[must_use]
    pub fn node_of(&self, label: &L) -> Option<&GraphNode<L>> {
        self.index.get(label).map(|&position| &self.nodes[position])
    }

    /// Returns the index of the node carrying `label`.
    ///
    /// # Errors
    /// Returns [`GraphError::LabelNotFound`] when no node carries `label`.
    pub fn node_index_of(&self, label: &L) -> Result<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::LabelNotFound {
                label: describe(label),
            })
    }

    fn index_of_node(&self, node: &GraphNode<L>) -> Result<usize> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound {
                node: describe(node.label()),
            })
    }

    fn endpoint_indexes(&self, edge: &GraphEdge<L>) -> Result<(usize, usize)> {
        Ok((self.index_of_node(edge.node1())?, self.index_of_node(edge.node2())?))
    }

    /// Stores `edge` in both symmetric cells.
    ///
    /// Returns `false` without effect when the endpoints are already joined,
    /// since the graph holds at most one edge per pair of nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::DirectedEdge`] for a directed edge and
    /// [`GraphError::NodeNotFound`] when an endpoint is not in the graph.
    pub fn add_edge(&mut self, edge: GraphEdge<L>) -> Result<bool> {
        if edge.is_directed() {
            return Err(GraphError::DirectedEdge {
                edge: describe(&edge),
            });
        }
        let (first, second) = self.endpoint_indexes(&edge)?;
        if self.matrix[first][second].is_some() {
            return Ok(false);
        }
        self.matrix[second][first] = Some(edge.clone());
        self.matrix[first][second] = Some(edge);
        Ok(true)
    }

    /// Joins the nodes carrying `first` and `second` with an unweighted edge.
    ///
    /// # Errors
    /// See [`Self::add_edge`].
    pub fn add_edge_between(&mut self, first: L, second: L) -> Result<bool> {
        self.add_edge(GraphEdge::undirected(
            GraphNode::new(first),
            GraphNode::new(second),
        ))
    }

    /// Joins the nodes carrying `first` and `second` with a weighted edge.
    ///
    /// # Errors
    /// See [`Self::add_edge`].
    pub fn add_weighted_edge_between(&mut self, first: L, second: L, weight: f64) -> Result<bool> {
        self.add_edge(GraphEdge::weighted_undirected(
            GraphNode::new(first),
            GraphNode::new(second),
            weight,
        ))
    }

    /// Clears both symmetric cells joining the endpoints of `edge`.
    ///
    /// Returns `false` when the endpoints are not joined.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when an endpoint is not in the
    /// graph.
    pub fn remove_edge(&mut self, edge: &GraphEdge<L>) -> Result<bool> {
        let (first, second) = self.endpoint_indexes(edge)?;
        if self.matrix[first][second].is_none() {
            return Ok(false);
        }
        self.matrix[first][second] = None;
        self.matrix[second][first] = None;
        Ok(true)
    }

    /// Returns `true` when the cell joining the endpoints of `edge` holds an
    /// edge equal to it. Symmetry means one cell suffices.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when an endpoint is not in the
    /// graph.
    pub fn contains_edge(&self, edge: &GraphEdge<L>) -> Result<bool> {
        let (first, second) = self.endpoint_indexes(edge)?;
        Ok(self.matrix[first][second].as_ref() == Some(edge))
    }

    /// Returns the edge joining `first` and `second`, if any.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when either node is not in the
    /// graph.
    pub fn edge(&self, first: &GraphNode<L>, second: &GraphNode<L>) -> Result<Option<&GraphEdge<L>>> {
        let first = self.index_of_node(first)?;
        let second = self.index_of_node(second)?;
        Ok(self.matrix[first][second].as_ref())
    }

    /// Returns the nodes joined to `node` by an edge.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `node` is not in the graph.
    pub fn adjacent_nodes_of(&self, node: &GraphNode<L>) -> Result<HashSet<&GraphNode<L>>> {
        let position = self.index_of_node(node)?;
        Ok(self.neighbours_in_row(position))
    }

    /// Returns the nodes joined to the node stored at `index`.
    ///
    /// # Errors
    /// Returns [`GraphError::IndexOutOfRange`] when `index >= node_count()`.
    pub fn adjacent_nodes_at_index(&self, index: usize) -> Result<HashSet<&GraphNode<L>>> {
        self.check_index(index)?;
        Ok(self.neighbours_in_row(index))
    }

    fn neighbours_in_row(&self, position: usize) -> HashSet<&GraphNode<L>> {
        let node = &self.nodes[position];
        self.matrix[position]
            .iter()
            .flatten()
            .filter_map(|edge| edge.other_endpoint(node))
            .collect()
    }

    /// Returns the edges incident to `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `node` is not in the graph.
    pub fn edges_of(&self, node: &GraphNode<L>) -> Result<HashSet<&GraphEdge<L>>> {
        let position = self.index_of_node(node)?;
        Ok(self.matrix[position].iter().flatten().collect())
    }

    /// Returns the number of edges incident to `node`; a self-loop counts
    /// once.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `node` is not in the graph.
    pub fn degree_of(&self, node: &GraphNode<L>) -> Result<usize> {
        let position = self.index_of_node(node)?;
        Ok(self.matrix[position].iter().flatten().count())
    }

    /// Checks the structural invariants: contiguous indices, a square matrix
    /// and symmetric cells.
    #[cfg(test)]
    pub(super) fn check_invariants(&self) -> core::result::Result<(), String> {
        let count = self.nodes.len();
        if self.index.len() != count {
            return Err(format!("index has {} entries for {count} nodes", self.index.len()));
        }
        for (position, node) in self.nodes.iter().enumerate() {
            if self.index.get(node) != Some(&position) {
                return Err(format!("node {node:?} is not indexed at {position}"));
            }
        }
        if self.matrix.len() != count || self.matrix.iter().any(|row| row.len() != count) {
            return Err(format!("matrix is not {count}x{count}"));
        }
        for first in 0..count {
            for second in 0..count {
                if self.matrix[first][second] != self.matrix[second][first] {
                    return Err(format!("cells ({first}, {second}) and ({second}, {first}) differ"));
                }
            }
        }
        Ok(())
    }
}

impl<L> Graph for UndirectedGraph<L>
where
    L: Eq + Hash + Clone + fmt::Debug,
{
    type Label = L;

    fn is_directed(&self) -> bool {
        false
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn nodes(&self) -> Vec<&GraphNode<L>> {
        self.nodes.iter().collect()
    }

    fn edges(&self) -> Vec<&GraphEdge<L>> {
        self.upper_triangle().collect()
    }
}
