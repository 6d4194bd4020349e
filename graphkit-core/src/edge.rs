//! Graph edge value type.
//!
//! Edges compare by value: directedness, endpoint pair and weight. The
//! endpoint pair of an undirected edge is unordered, so `(A, B)` and `(B, A)`
//! describe the same edge and hash identically.

use std::{
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
};

use crate::GraphNode;

/// An edge between two nodes with an optional weight.
///
/// # Examples
/// ```
/// use graphkit_core::{GraphEdge, GraphNode};
///
/// let a = GraphNode::new("A");
/// let b = GraphNode::new("B");
/// let forward = GraphEdge::weighted_undirected(a.clone(), b.clone(), 2.0);
/// let backward = GraphEdge::weighted_undirected(b, a, 2.0);
/// assert_eq!(forward, backward);
/// assert_eq!(forward.weight(), Some(2.0));
/// ```
#[derive(Clone)]
pub struct GraphEdge<L> {
    node1: GraphNode<L>,
    node2: GraphNode<L>,
    directed: bool,
    weight: Option<f64>,
}

impl<L> GraphEdge<L> {
    /// Creates an unweighted undirected edge.
    #[must_use]
    pub const fn undirected(node1: GraphNode<L>, node2: GraphNode<L>) -> Self {
        Self {
            node1,
            node2,
            directed: false,
            weight: None,
        }
    }

    /// Creates a weighted undirected edge.
    #[must_use]
    pub const fn weighted_undirected(node1: GraphNode<L>, node2: GraphNode<L>, weight: f64) -> Self {
        Self {
            node1,
            node2,
            directed: false,
            weight: Some(weight),
        }
    }

    /// Creates an unweighted directed edge from `node1` to `node2`.
    #[must_use]
    pub const fn directed(node1: GraphNode<L>, node2: GraphNode<L>) -> Self {
        Self {
            node1,
            node2,
            directed: true,
            weight: None,
        }
    }

    /// Creates a weighted directed edge from `node1` to `node2`.
    #[must_use]
    pub const fn weighted_directed(node1: GraphNode<L>, node2: GraphNode<L>, weight: f64) -> Self {
        Self {
            node1,
            node2,
            directed: true,
            weight: Some(weight),
        }
    }

    /// Returns the first endpoint (the source of a directed edge).
    #[rustfmt::skip]
    #[must_use]
    pub const fn node1(&self) -> &GraphNode<L> { &self.node1 }

    /// Returns the second endpoint (the target of a directed edge).
    #[rustfmt::skip]
    #[must_use]
    pub const fn node2(&self) -> &GraphNode<L> { &self.node2 }

    /// Returns `true` for directed edges.
    #[rustfmt::skip]
    #[must_use]
    pub const fn is_directed(&self) -> bool { self.directed }

    /// Returns `true` when the edge carries a weight.
    #[must_use]
    pub const fn has_weight(&self) -> bool {
        self.weight.is_some()
    }

    /// Returns the edge weight, if any.
    #[rustfmt::skip]
    #[must_use]
    pub const fn weight(&self) -> Option<f64> { self.weight }
}

impl<L: PartialEq> GraphEdge<L> {
    /// Returns the endpoint opposite `node`, or `None` when `node` is not an
    /// endpoint. A self-loop returns `node` itself.
    #[must_use]
    pub fn other_endpoint(&self, node: &GraphNode<L>) -> Option<&GraphNode<L>> {
        if self.node1 == *node {
            Some(&self.node2)
        } else if self.node2 == *node {
            Some(&self.node1)
        } else {
            None
        }
    }
}

/// Maps a weight to a bit pattern where `-0.0` and `0.0` coincide and every
/// NaN collapses to one value.
fn weight_key(weight: Option<f64>) -> Option<u64> {
    weight.map(|value| {
        if value == 0.0 {
            0.0_f64.to_bits()
        } else if value.is_nan() {
            f64::NAN.to_bits()
        } else {
            value.to_bits()
        }
    })
}

fn fingerprint<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl<L: PartialEq> PartialEq for GraphEdge<L> {
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed || weight_key(self.weight) != weight_key(other.weight) {
            return false;
        }
        let same_order = self.node1 == other.node1 && self.node2 == other.node2;
        if self.directed {
            return same_order;
        }
        same_order || (self.node1 == other.node2 && self.node2 == other.node1)
    }
}

impl<L: Eq> Eq for GraphEdge<L> {}

impl<L: Hash> Hash for GraphEdge<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.directed.hash(state);
        if self.directed {
            self.node1.hash(state);
            self.node2.hash(state);
        } else {
            let left = fingerprint(&self.node1);
            let right = fingerprint(&self.node2);
            left.min(right).hash(state);
            left.max(right).hash(state);
        }
        weight_key(self.weight).hash(state);
    }
}

impl<L: fmt::Debug> fmt::Debug for GraphEdge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(f, "Edge({:?} {arrow} {:?}", self.node1.label(), self.node2.label())?;
        if let Some(weight) = self.weight {
            write!(f, ", w={weight}")?;
        }
        f.write_str(")")
    }
}
