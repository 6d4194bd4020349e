//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! Edges are ordered by weight with an in-place heap sort and scanned once;
//! an edge is accepted when its endpoints still belong to different sets of
//! a [`DisjointSetForest`]. The scan stops as soon as `node_count - 1` edges
//! have been accepted, so a disconnected graph yields a spanning forest.

mod heap_sort;

use std::{fmt, hash::Hash};

use tracing::{debug, instrument, warn};

use crate::{
    DisjointSetForest, Graph, GraphEdge, GraphNode,
    error::{MstError, describe},
};

use self::heap_sort::heap_sort_by;

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest<L> {
    edges: Vec<GraphEdge<L>>,
    component_count: usize,
}

impl<L> MinimumSpanningForest<L> {
    /// Returns the accepted edges in the order Kruskal accepted them, which is
    /// non-decreasing by weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[GraphEdge<L>] { &self.edges }

    /// Returns the number of accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns the number of trees in the forest, isolated nodes included.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().filter_map(GraphEdge::weight).sum()
    }

    /// Consumes the forest and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<GraphEdge<L>> {
        self.edges
    }
}

impl<L: PartialEq> MinimumSpanningForest<L> {
    /// Returns `true` when an edge equal to `edge` was accepted.
    #[must_use]
    pub fn contains(&self, edge: &GraphEdge<L>) -> bool {
        self.edges.contains(edge)
    }
}

/// Reusable Kruskal minimum spanning forest computer.
///
/// The computer owns one [`DisjointSetForest`] that is cleared at the start
/// and end of every call, so one instance can process any number of graphs
/// in sequence without state leaking between them.
///
/// # Examples
/// ```
/// use graphkit_core::{KruskalMsp, UndirectedGraph};
///
/// let mut graph = UndirectedGraph::new();
/// for label in ["A", "B", "C"] {
///     graph.add_node_with_label(label);
/// }
/// graph.add_weighted_edge_between("A", "B", 1.0)?;
/// graph.add_weighted_edge_between("B", "C", 2.0)?;
/// graph.add_weighted_edge_between("A", "C", 3.0)?;
///
/// let mut kruskal = KruskalMsp::new();
/// let forest = kruskal.compute_msp(&graph)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct KruskalMsp<L> {
    forest: DisjointSetForest<GraphNode<L>>,
}

impl<L> Default for KruskalMsp<L> {
    fn default() -> Self {
        Self {
            forest: DisjointSetForest::new(),
        }
    }
}

impl<L> KruskalMsp<L> {
    /// Creates a computer with an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L> KruskalMsp<L>
where
    L: Eq + Hash + Clone + fmt::Debug,
{
    /// Computes a minimum spanning forest of `graph`.
    ///
    /// Every precondition is checked before the forest is touched.
    ///
    /// # Errors
    /// Returns [`MstError::DirectedGraph`] for a directed graph,
    /// [`MstError::DirectedEdge`] for a directed edge reported by an
    /// undirected graph, [`MstError::MissingWeight`], [`MstError::NegativeWeight`] or
    /// [`MstError::NanWeight`] for an edge without a usable weight, and
    /// [`MstError::DisjointSet`] when the graph reports an edge whose
    /// endpoint is not among its nodes.
    #[instrument(
        name = "mst.compute_msp",
        err,
        skip_all,
        fields(nodes = graph.node_count(), edges = graph.edge_count()),
    )]
    pub fn compute_msp<G>(&mut self, graph: &G) -> Result<MinimumSpanningForest<L>, MstError>
    where
        G: Graph<Label = L> + ?Sized,
    {
        self.forest.clear();
        let outcome = self.kruskal(graph);
        self.forest.clear();
        outcome
    }

    fn kruskal<G>(&mut self, graph: &G) -> Result<MinimumSpanningForest<L>, MstError>
    where
        G: Graph<Label = L> + ?Sized,
    {
        if graph.is_directed() {
            warn!("rejected directed graph");
            return Err(MstError::DirectedGraph);
        }
        let mut candidates = graph
            .edges()
            .into_iter()
            .map(|edge| validated_weight(edge).map(|weight| (weight, edge)))
            .collect::<Result<Vec<_>, _>>()?;

        let node_count = graph.node_count();
        for node in graph.nodes() {
            self.forest.make_set(node.clone())?;
        }
        heap_sort_by(&mut candidates, |left, right| left.0.total_cmp(&right.0));

        let wanted = node_count.saturating_sub(1);
        let mut accepted = Vec::with_capacity(wanted);
        for (_, edge) in candidates {
            if accepted.len() == wanted {
                break;
            }
            let first = self.forest.find_set(edge.node1())?;
            let second = self.forest.find_set(edge.node2())?;
            if first != second {
                self.forest.union(&first, &second)?;
                accepted.push(edge.clone());
            }
        }

        let forest = MinimumSpanningForest {
            component_count: node_count - accepted.len(),
            edges: accepted,
        };
        debug!(
            accepted = forest.len(),
            components = forest.component_count(),
            total_weight = forest.total_weight(),
            "minimum spanning forest computed"
        );
        Ok(forest)
    }
}

fn validated_weight<L: fmt::Debug>(edge: &GraphEdge<L>) -> Result<f64, MstError> {
    if edge.is_directed() {
        warn!(edge = ?edge, "rejected directed edge");
        return Err(MstError::DirectedEdge {
            edge: describe(edge),
        });
    }
    let Some(weight) = edge.weight() else {
        warn!(edge = ?edge, "rejected edge without weight");
        return Err(MstError::MissingWeight {
            edge: describe(edge),
        });
    };
    if weight.is_nan() {
        warn!(edge = ?edge, "rejected edge with NaN weight");
        return Err(MstError::NanWeight {
            edge: describe(edge),
        });
    }
    if weight < 0.0 {
        warn!(edge = ?edge, weight, "rejected edge with negative weight");
        return Err(MstError::NegativeWeight {
            edge: describe(edge),
            weight,
        });
    }
    Ok(weight)
}

/// Computes a minimum spanning forest of `graph` with a fresh
/// [`KruskalMsp`].
///
/// # Errors
/// See [`KruskalMsp::compute_msp`].
pub fn kruskal_msp<G>(graph: &G) -> Result<MinimumSpanningForest<G::Label>, MstError>
where
    G: Graph + ?Sized,
{
    KruskalMsp::new().compute_msp(graph)
}

#[cfg(test)]
mod property;
