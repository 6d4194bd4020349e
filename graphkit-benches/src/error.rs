//! Benchmark setup error type.
//!
//! Aggregates the error types that may arise during benchmark data
//! preparation so that setup functions can propagate failures with `?`
//! instead of using `.expect()`.

use graphkit_core::{ComponentsError, DisjointSetError, GraphError, MstError};

use crate::synthetic::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph configuration was rejected.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building the benchmark graph failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// MST computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Connected-components computation failed.
    #[error("connected components computation failed: {0}")]
    Components(#[from] ComponentsError),
    /// A disjoint-set forest operation failed.
    #[error("disjoint-set forest operation failed: {0}")]
    DisjointSet(#[from] DisjointSetError),
}
