//! Property 1: Equivalence with the Prim oracle.
//!
//! For any generated graph the traced runner must select a forest with the
//! same optimal weight, edge count, and component count as the oracle.

use proptest::test_runner::TestCaseResult;

use super::helpers::{ensure, run_fixture};
use super::oracle::prim_forest;
use super::types::KruskalFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &KruskalFixture) -> TestCaseResult {
    let forest = run_fixture(fixture)?;
    let oracle = prim_forest(fixture.node_count, &fixture.edges, fixture.mode);

    ensure(forest.total_weight() == oracle.total_weight, fixture, || {
        format!(
            "total weight mismatch: kruskal={}, oracle={}",
            forest.total_weight(),
            oracle.total_weight
        )
    })?;
    ensure(forest.edges().len() == oracle.edge_count, fixture, || {
        format!(
            "edge count mismatch: kruskal={}, oracle={}",
            forest.edges().len(),
            oracle.edge_count
        )
    })?;
    ensure(
        forest.component_count() == oracle.component_count,
        fixture,
        || {
            format!(
                "component count mismatch: kruskal={}, oracle={}",
                forest.component_count(),
                oracle.component_count
            )
        },
    )
}
