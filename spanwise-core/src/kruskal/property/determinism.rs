//! Property 4: Determinism.
//!
//! Runs the same graph repeatedly and asserts that the forest and the full
//! trace are identical every time.

use proptest::test_runner::TestCaseResult;

use super::helpers::{ensure, run_fixture};
use super::types::{DeterminismConfig, KruskalFixture};

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &KruskalFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();
    let baseline = run_fixture(fixture)?;

    for run in 1..config.repetitions {
        let repeated = run_fixture(fixture)?;
        ensure(repeated.edges() == baseline.edges(), fixture, || {
            format!("run {run}: accepted edges diverged from baseline")
        })?;
        ensure(repeated.trace() == baseline.trace(), fixture, || {
            format!(
                "run {run}: trace diverged (baseline {} steps, run {} steps)",
                baseline.trace().len(),
                repeated.trace().len()
            )
        })?;
    }
    Ok(())
}
