//! Property 2: Structural invariant verification.
//!
//! For any forest produced by Kruskal, verifies:
//!
//! - **Membership**: every accepted edge is stored in the input graph.
//! - **No self-loops**: no accepted edge joins a node to itself.
//! - **Ordering**: edges were accepted in non-decreasing weight order.
//! - **Acyclicity**: no accepted edge closes a cycle.
//! - **Edge count**: `V - C` edges for `C` connected components of the input.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{GraphEdge, UndirectedGraph, kruskal_msp};

use super::helpers::{endpoints, find_root, weight_of};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = kruskal_msp(&fixture.graph).map_err(|err| {
        TestCaseError::fail(format!("kruskal_msp failed: {err} ({})", fixture.describe()))
    })?;
    let edges = forest.edges();

    validate_membership(&fixture.graph, edges)?;
    validate_no_self_loops(edges)?;
    validate_acceptance_order(edges)?;
    validate_acyclicity(fixture.graph.node_count(), edges)?;

    let input_components = count_input_components(&fixture.graph);
    if forest.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "forest has {} components, input has {input_components} ({})",
            forest.component_count(),
            fixture.describe(),
        )));
    }
    let expected = fixture.graph.node_count() - input_components;
    if edges.len() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected n - c = {expected} ({})",
            edges.len(),
            fixture.describe(),
        )));
    }
    Ok(())
}

/// Generic edge validator that applies a predicate to each edge, returning
/// early with an error if the predicate produces a message.
fn validate_edges<F>(edges: &[GraphEdge<usize>], mut predicate: F) -> TestCaseResult
where
    F: FnMut(usize, &GraphEdge<usize>) -> Option<String>,
{
    for (i, edge) in edges.iter().enumerate() {
        if let Some(msg) = predicate(i, edge) {
            return Err(TestCaseError::fail(msg));
        }
    }
    Ok(())
}

fn validate_membership(graph: &UndirectedGraph<usize>, edges: &[GraphEdge<usize>]) -> TestCaseResult {
    validate_edges(edges, |i, edge| {
        (graph.contains_edge(edge) != Ok(true)).then(|| format!("edge {i}: {edge:?} is not in the graph"))
    })
}

fn validate_no_self_loops(edges: &[GraphEdge<usize>]) -> TestCaseResult {
    validate_edges(edges, |i, edge| {
        let (source, target) = endpoints(edge);
        (source == target).then(|| format!("edge {i}: self-loop on node {source}"))
    })
}

fn validate_acceptance_order(edges: &[GraphEdge<usize>]) -> TestCaseResult {
    let mut previous = f64::NEG_INFINITY;
    validate_edges(edges, |i, edge| {
        let weight = weight_of(edge);
        let out_of_order = weight < previous;
        previous = weight;
        out_of_order.then(|| format!("edge {i}: weight {weight} accepted after a heavier edge"))
    })
}

fn validate_acyclicity(node_count: usize, edges: &[GraphEdge<usize>]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..node_count).collect();
    validate_edges(edges, |i, edge| {
        let (source, target) = endpoints(edge);
        let left = find_root(&mut parent, source);
        let right = find_root(&mut parent, target);
        if left == right {
            return Some(format!("edge {i}: ({source}, {target}) creates a cycle"));
        }
        parent[right] = left;
        None
    })
}

/// Counts connected components of the input graph with a plain parent array.
fn count_input_components(graph: &UndirectedGraph<usize>) -> usize {
    let node_count = graph.node_count();
    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut components = node_count;
    for edge in graph.edges() {
        let (source, target) = endpoints(edge);
        let left = find_root(&mut parent, source);
        let right = find_root(&mut parent, target);
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}
