//! Connected components of undirected graphs.
//!
//! Every node starts as a singleton set of a [`DisjointSetForest`]; the
//! endpoints of every edge are merged, and each surviving set becomes one
//! component.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
    slice,
};

use tracing::{debug, instrument, warn};

use crate::{DisjointSetForest, Graph, GraphNode, error::ComponentsError};

/// A partition of a graph's nodes into maximal connected subsets.
///
/// Components are ordered by the smallest node index they contain.
#[derive(Clone, Debug)]
pub struct ConnectedComponents<L> {
    components: Vec<HashSet<GraphNode<L>>>,
}

impl<L> ConnectedComponents<L> {
    /// Returns the number of components.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.components.len() }

    /// Returns `true` when the graph had no nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.components.is_empty() }

    /// Iterates over the components in order.
    pub fn iter(&self) -> slice::Iter<'_, HashSet<GraphNode<L>>> {
        self.components.iter()
    }

    /// Consumes the partition and returns its components.
    #[must_use]
    pub fn into_inner(self) -> Vec<HashSet<GraphNode<L>>> {
        self.components
    }
}

impl<L: Eq + Hash> ConnectedComponents<L> {
    /// Returns the component containing `node`, if the node was in the graph.
    #[must_use]
    pub fn component_of(&self, node: &GraphNode<L>) -> Option<&HashSet<GraphNode<L>>> {
        self.components.iter().find(|component| component.contains(node))
    }

    /// Returns `true` when `first` and `second` lie in the same component.
    #[must_use]
    pub fn are_connected(&self, first: &GraphNode<L>, second: &GraphNode<L>) -> bool {
        self.component_of(first)
            .is_some_and(|component| component.contains(second))
    }
}

impl<L: Eq + Hash> PartialEq for ConnectedComponents<L> {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl<L: Eq + Hash> Eq for ConnectedComponents<L> {}

impl<'a, L> IntoIterator for &'a ConnectedComponents<L> {
    type Item = &'a HashSet<GraphNode<L>>;
    type IntoIter = slice::Iter<'a, HashSet<GraphNode<L>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Reusable connected-components computer.
///
/// Like [`crate::KruskalMsp`], it owns one forest that is cleared around every
/// call.
///
/// # Examples
/// ```
/// use graphkit_core::{ConnectedComponentsComputer, GraphNode, UndirectedGraph};
///
/// let mut graph = UndirectedGraph::new();
/// for label in ["A", "B", "C", "D"] {
///     graph.add_node_with_label(label);
/// }
/// graph.add_edge_between("A", "B")?;
/// graph.add_edge_between("C", "D")?;
///
/// let components = ConnectedComponentsComputer::new().compute_connected_components(&graph)?;
/// assert_eq!(components.len(), 2);
/// assert!(components.are_connected(&GraphNode::new("C"), &GraphNode::new("D")));
/// assert!(!components.are_connected(&GraphNode::new("A"), &GraphNode::new("C")));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct ConnectedComponentsComputer<L> {
    forest: DisjointSetForest<GraphNode<L>>,
}

impl<L> Default for ConnectedComponentsComputer<L> {
    fn default() -> Self {
        Self {
            forest: DisjointSetForest::new(),
        }
    }
}

impl<L> ConnectedComponentsComputer<L> {
    /// Creates a computer with an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L> ConnectedComponentsComputer<L>
where
    L: Eq + Hash + Clone + fmt::Debug,
{
    /// Partitions the nodes of `graph` into connected components.
    ///
    /// # Errors
    /// Returns [`ComponentsError::DirectedGraph`] for a directed graph and
    /// [`ComponentsError::DisjointSet`] when the graph reports an edge whose
    /// endpoint is not among its nodes.
    #[instrument(
        name = "components.compute",
        err,
        skip_all,
        fields(nodes = graph.node_count(), edges = graph.edge_count()),
    )]
    pub fn compute_connected_components<G>(
        &mut self,
        graph: &G,
    ) -> Result<ConnectedComponents<L>, ComponentsError>
    where
        G: Graph<Label = L> + ?Sized,
    {
        self.forest.clear();
        let outcome = self.partition(graph);
        self.forest.clear();
        outcome
    }

    fn partition<G>(&mut self, graph: &G) -> Result<ConnectedComponents<L>, ComponentsError>
    where
        G: Graph<Label = L> + ?Sized,
    {
        if graph.is_directed() {
            warn!("rejected directed graph");
            return Err(ComponentsError::DirectedGraph);
        }
        let nodes = graph.nodes();
        for node in &nodes {
            self.forest.make_set((*node).clone())?;
        }
        for edge in graph.edges() {
            if self.forest.find_set(edge.node1())? != self.forest.find_set(edge.node2())? {
                self.forest.union(edge.node1(), edge.node2())?;
            }
        }

        let positions: HashMap<&GraphNode<L>, usize> = nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (*node, position))
            .collect();
        let mut grouped = Vec::new();
        for representative in self.forest.current_representatives() {
            let members = self
                .forest
                .current_elements_of_set_containing(&representative)?;
            let first = members
                .first()
                .and_then(|member| positions.get(member))
                .copied()
                .unwrap_or(usize::MAX);
            grouped.push((first, members.into_iter().collect::<HashSet<_>>()));
        }
        grouped.sort_by_key(|(first, _)| *first);

        let components = ConnectedComponents {
            components: grouped.into_iter().map(|(_, members)| members).collect(),
        };
        debug!(components = components.len(), "connected components computed");
        Ok(components)
    }
}

/// Partitions the nodes of `graph` with a fresh
/// [`ConnectedComponentsComputer`].
///
/// # Errors
/// See [`ConnectedComponentsComputer::compute_connected_components`].
pub fn connected_components<G>(graph: &G) -> Result<ConnectedComponents<G::Label>, ComponentsError>
where
    G: Graph + ?Sized,
{
    ConnectedComponentsComputer::new().compute_connected_components(graph)
}
