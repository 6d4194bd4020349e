//! Benchmark support crate for graphkit.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for Kruskal's minimum spanning forest, connected components and
//! the disjoint-set forest.

pub mod error;
pub mod params;
pub mod synthetic;
