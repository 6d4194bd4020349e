//! Seeded synthetic graphs for benchmarks.
//!
//! Graphs are built from a random spanning path, so they are connected, plus
//! random extra edges until the requested average degree is reached. Weights
//! are small integers stored as `f64`.

use graphkit_core::UndirectedGraph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Errors raised for invalid synthetic graph configurations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The requested maximum weight was zero.
    #[error("maximum weight must be greater than zero")]
    ZeroMaxWeight,
    /// The requested average degree cannot be reached without parallel
    /// edges.
    #[error("average degree {average_degree} exceeds {max_degree} for {node_count} nodes")]
    DegreeTooHigh {
        /// Requested average degree.
        average_degree: usize,
        /// Largest degree a simple graph on `node_count` nodes admits.
        max_degree: usize,
        /// Requested node count.
        node_count: usize,
    },
}

/// Configuration for a synthetic weighted graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of nodes, labelled `0..node_count`.
    pub node_count: usize,
    /// Target average node degree; at least the spanning path is built.
    pub average_degree: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: u32,
    /// RNG seed.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    fn validate(&self) -> Result<(), SyntheticError> {
        if self.node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }
        if self.max_weight == 0 {
            return Err(SyntheticError::ZeroMaxWeight);
        }
        let max_degree = self.node_count - 1;
        if self.average_degree > max_degree {
            return Err(SyntheticError::DegreeTooHigh {
                average_degree: self.average_degree,
                max_degree,
                node_count: self.node_count,
            });
        }
        Ok(())
    }

    /// Number of distinct edges the generator aims for.
    #[must_use]
    pub fn target_edge_count(&self) -> usize {
        self.node_count
            .saturating_mul(self.average_degree)
            .div_euclid(2)
            .max(self.node_count.saturating_sub(1))
    }
}

/// Generates a connected weighted graph.
///
/// # Errors
/// Returns [`BenchSetupError::Synthetic`] for an invalid configuration.
///
/// # Examples
/// ```
/// use graphkit_benches::synthetic::{SyntheticGraphConfig, weighted_graph};
///
/// let config = SyntheticGraphConfig {
///     node_count: 50,
///     average_degree: 4,
///     max_weight: 100,
///     seed: 7,
/// };
/// let graph = weighted_graph(&config)?;
/// assert_eq!(graph.node_count(), 50);
/// assert_eq!(graph.edge_count(), config.target_edge_count());
/// # Ok::<(), graphkit_benches::error::BenchSetupError>(())
/// ```
pub fn weighted_graph(config: &SyntheticGraphConfig) -> Result<UndirectedGraph<usize>, BenchSetupError> {
    config.validate()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = UndirectedGraph::with_capacity(config.node_count);
    for label in 0..config.node_count {
        graph.add_node_with_label(label);
    }

    let mut order: Vec<usize> = (0..config.node_count).collect();
    shuffle(&mut order, &mut rng);
    for pair in order.windows(2) {
        if let [left, right] = *pair {
            let weight = f64::from(rng.gen_range(1..=config.max_weight));
            graph.add_weighted_edge_between(left, right, weight)?;
        }
    }

    let target = config.target_edge_count();
    let mut edges = graph.edge_count();
    while edges < target {
        let left = rng.gen_range(0..config.node_count);
        let right = rng.gen_range(0..config.node_count);
        if left == right {
            continue;
        }
        let weight = f64::from(rng.gen_range(1..=config.max_weight));
        if graph.add_weighted_edge_between(left, right, weight)? {
            edges += 1;
        }
    }
    Ok(graph)
}

/// Generates `count` seeded union pairs over `0..element_count`.
///
/// # Errors
/// Returns [`SyntheticError::ZeroNodes`] when `element_count` is zero.
pub fn union_pairs(element_count: usize, count: usize, seed: u64) -> Result<Vec<(usize, usize)>, SyntheticError> {
    if element_count == 0 {
        return Err(SyntheticError::ZeroNodes);
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| {
            (
                rng.gen_range(0..element_count),
                rng.gen_range(0..element_count),
            )
        })
        .collect())
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
