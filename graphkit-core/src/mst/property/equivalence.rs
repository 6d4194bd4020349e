//! Property 1: Equivalence with the sequential oracle.
//!
//! For any generated graph, Kruskal must produce a forest with the same total
//! weight, edge count and component count as the oracle. Weights are small
//! integers, so totals compare exactly.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::kruskal_msp;

use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = kruskal_msp(&fixture.graph).map_err(|err| {
        TestCaseError::fail(format!("kruskal_msp failed: {err} ({})", fixture.describe()))
    })?;
    let oracle = sequential_kruskal(&fixture.graph);

    if forest.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={}, oracle={} ({})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.describe(),
        )));
    }
    if forest.len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, oracle={} ({})",
            forest.len(),
            oracle.edge_count,
            fixture.describe(),
        )));
    }
    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, oracle={} ({})",
            forest.component_count(),
            oracle.component_count,
            fixture.describe(),
        )));
    }
    Ok(())
}
