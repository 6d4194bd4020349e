//! Benchmark parameter types.
//!
//! Criterion renders these through `Display` to label each benchmark input.

use std::fmt;

/// Parameters for a graph algorithm benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Target average node degree.
    pub average_degree: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},deg={}", self.node_count, self.average_degree)
    }
}

/// Parameters for a disjoint-set forest benchmark run.
#[derive(Clone, Debug)]
pub struct ForestBenchParams {
    /// Number of registered elements.
    pub element_count: usize,
    /// Number of union operations applied.
    pub union_count: usize,
}

impl fmt::Display for ForestBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},unions={}", self.element_count, self.union_count)
    }
}
