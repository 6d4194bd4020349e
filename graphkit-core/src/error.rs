//! Error types for the graphkit core library.
//!
//! Every fallible operation reports a structured error carrying a stable
//! machine-readable code and a coarse [`ErrorKind`]. Offending labels and
//! elements are rendered with `Debug` so the error types stay non-generic.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($fields:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr, $kind:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }

            /// Return the [`ErrorKind`] this code belongs to.
            #[must_use]
            pub const fn kind(self) -> ErrorKind {
                match self {
                    $(Self::$CodeVariant => ErrorKind::$kind,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($fields)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }

            /// Classify this error into its coarse [`ErrorKind`].
            #[must_use]
            pub const fn kind(&self) -> ErrorKind {
                self.code().kind()
            }
        }
    };
}

/// Coarse classification shared by every error in the crate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// Well-formed but semantically illegal input.
    InvalidArgument,
    /// A node index fell outside `[0, node_count)`.
    IndexOutOfRange,
    /// The operation has no meaning for this graph variant.
    UnsupportedOperation,
}

impl ErrorKind {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
            Self::UnsupportedOperation => "UNSUPPORTED_OPERATION",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders a label or element for inclusion in an error payload.
pub(crate) fn describe<T: fmt::Debug + ?Sized>(value: &T) -> Arc<str> {
    Arc::from(format!("{value:?}"))
}

/// An error produced by [`crate::UndirectedGraph`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A node referenced by the caller is not a member of the graph.
    #[error("node {node} is not in the graph")]
    NodeNotFound {
        /// Debug rendering of the missing node's label.
        node: Arc<str>,
    },
    /// No node in the graph carries the requested label.
    #[error("no node carries label {label}")]
    LabelNotFound {
        /// Debug rendering of the requested label.
        label: Arc<str>,
    },
    /// A node index fell outside the contiguous index range.
    #[error("node index {index} is out of range for a graph with {node_count} nodes")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// A directed edge was offered to an undirected graph.
    #[error("directed edge {edge} cannot be stored in an undirected graph")]
    DirectedEdge {
        /// Debug rendering of the rejected edge.
        edge: Arc<str>,
    },
    /// The operation is undefined for undirected graphs.
    #[error("{operation} is not supported by an undirected graph")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A node referenced by the caller is not a member of the graph.
        NodeNotFound => NodeNotFound { .. } => "GRAPH_NODE_NOT_FOUND", InvalidArgument,
        /// No node in the graph carries the requested label.
        LabelNotFound => LabelNotFound { .. } => "GRAPH_LABEL_NOT_FOUND", InvalidArgument,
        /// A node index fell outside the contiguous index range.
        IndexOutOfRange => IndexOutOfRange { .. } => "GRAPH_INDEX_OUT_OF_RANGE", IndexOutOfRange,
        /// A directed edge was offered to an undirected graph.
        DirectedEdge => DirectedEdge { .. } => "GRAPH_DIRECTED_EDGE", InvalidArgument,
        /// The operation is undefined for undirected graphs.
        Unsupported => Unsupported { .. } => "GRAPH_UNSUPPORTED_OPERATION", UnsupportedOperation,
    }
}

/// An error produced by [`crate::DisjointSetForest`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// `make_set` was called for an element that is already registered.
    #[error("element {element} is already present in the forest")]
    ElementAlreadyPresent {
        /// Debug rendering of the duplicate element.
        element: Arc<str>,
    },
    /// The element has never been registered with `make_set`.
    #[error("element {element} is not present in the forest")]
    ElementNotPresent {
        /// Debug rendering of the unknown element.
        element: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// `make_set` was called for an element that is already registered.
        ElementAlreadyPresent => ElementAlreadyPresent { .. } => "FOREST_ELEMENT_ALREADY_PRESENT", InvalidArgument,
        /// The element has never been registered with `make_set`.
        ElementNotPresent => ElementNotPresent { .. } => "FOREST_ELEMENT_NOT_PRESENT", InvalidArgument,
    }
}

/// Errors returned while computing a minimum spanning tree/forest.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MstError {
    /// The input graph is directed.
    #[error("cannot compute a minimum spanning tree of a directed graph")]
    DirectedGraph,
    /// An edge of an undirected graph is itself directed.
    #[error("edge {edge} is directed")]
    DirectedEdge {
        /// Debug rendering of the directed edge.
        edge: Arc<str>,
    },
    /// An edge carries no weight.
    #[error("edge {edge} has no weight")]
    MissingWeight {
        /// Debug rendering of the unweighted edge.
        edge: Arc<str>,
    },
    /// An edge carries a negative weight.
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// Debug rendering of the offending edge.
        edge: Arc<str>,
        /// The rejected weight.
        weight: f64,
    },
    /// An edge carries a NaN weight, which cannot be ordered.
    #[error("edge {edge} has a NaN weight")]
    NanWeight {
        /// Debug rendering of the offending edge.
        edge: Arc<str>,
    },
    /// The internal disjoint-set forest rejected an operation.
    #[error("disjoint-set forest failed: {0}")]
    DisjointSet(#[from] DisjointSetError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The input graph is directed.
        DirectedGraph => DirectedGraph => "MST_DIRECTED_GRAPH", InvalidArgument,
        /// An edge of the input graph is directed.
        DirectedEdge => DirectedEdge { .. } => "MST_DIRECTED_EDGE", InvalidArgument,
        /// An edge carries no weight.
        MissingWeight => MissingWeight { .. } => "MST_MISSING_WEIGHT", InvalidArgument,
        /// An edge carries a negative weight.
        NegativeWeight => NegativeWeight { .. } => "MST_NEGATIVE_WEIGHT", InvalidArgument,
        /// An edge carries a NaN weight.
        NanWeight => NanWeight { .. } => "MST_NAN_WEIGHT", InvalidArgument,
        /// The internal disjoint-set forest rejected an operation.
        DisjointSetFailure => DisjointSet(..) => "MST_DISJOINT_SET_FAILURE", InvalidArgument,
    }
}

/// Errors returned while enumerating connected components.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ComponentsError {
    /// The input graph is directed.
    #[error("cannot compute connected components of a directed graph")]
    DirectedGraph,
    /// The internal disjoint-set forest rejected an operation.
    #[error("disjoint-set forest failed: {0}")]
    DisjointSet(#[from] DisjointSetError),
}

define_error_codes! {
    /// Stable codes describing [`ComponentsError`] variants.
    enum ComponentsErrorCode for ComponentsError {
        /// The input graph is directed.
        DirectedGraph => DirectedGraph => "COMPONENTS_DIRECTED_GRAPH", InvalidArgument,
        /// The internal disjoint-set forest rejected an operation.
        DisjointSetFailure => DisjointSet(..) => "COMPONENTS_DISJOINT_SET_FAILURE", InvalidArgument,
    }
}

/// Convenient alias for results returned by graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
