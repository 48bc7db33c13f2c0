//! Shared helper functions for Kruskal property-based tests.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::SpanningForest;

use super::types::KruskalFixture;

/// Path-halving find for independent union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Runs the runner on the fixture, mapping failures into test-case errors.
pub(super) fn run_fixture(fixture: &KruskalFixture) -> Result<SpanningForest<usize>, TestCaseError> {
    crate::run_kruskal(&fixture.graph(), fixture.mode).map_err(|e| {
        TestCaseError::fail(format!("run_kruskal failed: {e} ({})", fixture.describe()))
    })
}

/// Fails the test case with `message` and the fixture description when
/// `condition` does not hold.
pub(super) fn ensure(
    condition: bool,
    fixture: &KruskalFixture,
    message: impl FnOnce() -> String,
) -> TestCaseResult {
    if condition {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "{} ({})",
            message(),
            fixture.describe()
        )))
    }
}
