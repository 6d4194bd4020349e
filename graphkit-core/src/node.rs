//! Graph node value type.

use std::{borrow::Borrow, fmt};

/// A graph node identified by its label.
///
/// Two nodes are equal exactly when their labels are equal, and hash the same
/// way, so a node can be rebuilt from its label to look it up in a graph.
///
/// # Examples
/// ```
/// use graphkit_core::GraphNode;
///
/// let node = GraphNode::new("A");
/// assert_eq!(node, GraphNode::new("A"));
/// assert_eq!(*node.label(), "A");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphNode<L> {
    label: L,
}

impl<L> GraphNode<L> {
    /// Creates a node carrying `label`.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(label: L) -> Self { Self { label } }

    /// Returns the node's label.
    #[rustfmt::skip]
    #[must_use]
    pub const fn label(&self) -> &L { &self.label }

    /// Consumes the node and returns its label.
    #[must_use]
    pub fn into_label(self) -> L {
        self.label
    }
}

impl<L> From<L> for GraphNode<L> {
    fn from(label: L) -> Self {
        Self::new(label)
    }
}

// Derived `Hash`/`Eq` on a single-field struct delegate to the label, so
// borrowed lookups by label agree with lookups by node.
impl<L> Borrow<L> for GraphNode<L> {
    fn borrow(&self) -> &L {
        &self.label
    }
}

impl<L: fmt::Debug> fmt::Debug for GraphNode<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:?})", self.label)
    }
}

impl<L: fmt::Display> fmt::Display for GraphNode<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label.fmt(f)
    }
}
