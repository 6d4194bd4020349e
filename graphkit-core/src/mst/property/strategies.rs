//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Each generator builds a list of
//! `(source, target, weight)` triples that [`MstFixture::new`] turns into a
//! graph.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::test_utils::max_generated_nodes;

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for most generated graphs.
const MIN_NODES: usize = 8;
/// Default maximum node count, overridable through `GRAPHKIT_PBT_MAX_NODES`.
const MAX_NODES: usize = 48;
/// Maximum node count for dense graphs (kept smaller because the matrix and
/// the edge count both grow quadratically).
const DENSE_MAX_NODES: usize = 24;

type EdgeList = Vec<(usize, usize, u32)>;

/// Generates MST fixtures covering all five weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let max_nodes = max_generated_nodes(MAX_NODES).max(MIN_NODES);
    let (node_count, edges) = match distribution {
        WeightDistribution::Unique => {
            probabilistic_graph(rng, max_nodes, (0.2, 0.6), |r| r.gen_range(1..=1_000_000))
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<u32> = (0..rng.gen_range(1..=3)).map(|_| rng.gen_range(1..=10)).collect();
            probabilistic_graph(rng, max_nodes, (0.3, 0.7), move |r| {
                pool[r.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => sparse_graph(rng, max_nodes),
        WeightDistribution::Dense => probabilistic_graph(
            rng,
            max_nodes.min(DENSE_MAX_NODES),
            (0.7, 0.95),
            |r| r.gen_range(1..=100),
        ),
        WeightDistribution::Disconnected => disconnected_graph(rng),
    };
    MstFixture::new(node_count, &edges, distribution)
}

/// Adds an edge between every unique node pair with a probability sampled
/// from `edge_prob_range`, guaranteeing at least one edge.
fn probabilistic_graph(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> u32,
) -> (usize, EdgeList) {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let edge_probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();
    for (source, target) in all_pairs(0, node_count) {
        if rng.gen_bool(edge_probability) {
            edges.push((source, target, weight(rng)));
        }
    }
    if edges.is_empty() {
        edges.push((0, 1, weight(rng)));
    }
    (node_count, edges)
}

/// Builds a random spanning tree (guaranteeing connectivity) and then adds
/// a small number of extra edges, self-loops included.
fn sparse_graph(rng: &mut SmallRng, max_nodes: usize) -> (usize, EdgeList) {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let mut perm: Vec<usize> = (0..node_count).collect();
    shuffle(&mut perm, rng);

    let mut edges: EdgeList = perm
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(1..=100)))
        .collect();
    let extra_count = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra_count {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        edges.push((source, target, rng.gen_range(1..=100)));
    }
    (node_count, edges)
}

/// Generates 2-5 components of 1-12 nodes each with no cross-component
/// edges.
fn disconnected_graph(rng: &mut SmallRng) -> (usize, EdgeList) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5)).map(|_| rng.gen_range(1..=12)).collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for &size in &sizes {
        let edge_probability = rng.gen_range(0.3..=0.8);
        let start_len = edges.len();
        for (source, target) in all_pairs(offset, size) {
            if rng.gen_bool(edge_probability) {
                edges.push((source, target, rng.gen_range(1..=100)));
            }
        }
        if size >= 2 && edges.len() == start_len {
            edges.push((offset, offset + 1, rng.gen_range(1..=100)));
        }
        offset += size;
    }
    (offset, edges)
}

/// Returns all unique undirected pairs `(offset + i, offset + j)` where
/// `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            pairs.push((offset + i, offset + j));
        }
    }
    pairs
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
