//! Property 3: Trace invariants.
//!
//! Walks the trace step by step and checks the run-level state machine, the
//! running weight sum, append-only growth of the accepted edges, the
//! position of the current edge, the ordering of the sorted edges, and that
//! each parent snapshot reflects the partition at its own step.

use proptest::test_runner::TestCaseResult;

use crate::{Edge, Step, StepStatus};

use super::helpers::{ensure, find_root, run_fixture};
use super::types::KruskalFixture;

/// Runs the trace invariant property for the given fixture.
pub(super) fn run_trace_invariants_property(fixture: &KruskalFixture) -> TestCaseResult {
    let forest = run_fixture(fixture)?;
    let steps = forest.trace().steps();

    ensure(steps.len() >= 2, fixture, || {
        format!("trace has only {} steps", steps.len())
    })?;
    validate_state_machine(fixture, steps)?;

    let mut previous: &[Edge<usize>] = &[];
    for (i, step) in steps.iter().enumerate() {
        validate_running_sum(fixture, i, step)?;
        ensure(step.mst_edges().starts_with(previous), fixture, || {
            format!("step {i}: accepted edges are not an extension of step {}", i.saturating_sub(1))
        })?;
        ensure(!step.message().is_empty(), fixture, || {
            format!("step {i}: empty message")
        })?;
        validate_current_edge(fixture, i, step)?;
        validate_parent_snapshot(fixture, i, step)?;
        previous = step.mst_edges();
    }

    let last = &steps[steps.len() - 1];
    ensure(last.mst_edges() == forest.edges(), fixture, || {
        "final step disagrees with the returned forest".to_owned()
    })?;
    validate_sorted(fixture, last)
}

fn validate_state_machine(fixture: &KruskalFixture, steps: &[Step<usize>]) -> TestCaseResult {
    let statuses: Vec<StepStatus> = steps.iter().map(Step::status).collect();
    ensure(statuses[0] == StepStatus::Initial, fixture, || {
        format!("first step is {:?}", statuses[0])
    })?;
    ensure(statuses[statuses.len() - 1] == StepStatus::Final, fixture, || {
        format!("last step is {:?}", statuses[statuses.len() - 1])
    })?;

    let middle = &statuses[1..statuses.len() - 1];
    ensure(middle.len() % 2 == 0, fixture, || {
        format!("odd number of per-edge steps: {}", middle.len())
    })?;
    for (pair_index, pair) in middle.chunks(2).enumerate() {
        let well_formed = pair[0] == StepStatus::Evaluating
            && matches!(pair[1], StepStatus::Accepted | StepStatus::Rejected);
        ensure(well_formed, fixture, || {
            format!("edge {pair_index}: unexpected transition {pair:?}")
        })?;
    }
    Ok(())
}

fn validate_running_sum(fixture: &KruskalFixture, i: usize, step: &Step<usize>) -> TestCaseResult {
    let sum: f64 = step.mst_edges().iter().map(Edge::weight).sum();
    ensure(step.total_weight() == sum, fixture, || {
        format!(
            "step {i}: total weight {} differs from edge sum {sum}",
            step.total_weight()
        )
    })
}

fn validate_current_edge(fixture: &KruskalFixture, i: usize, step: &Step<usize>) -> TestCaseResult {
    let expects_edge = !matches!(step.status(), StepStatus::Initial | StepStatus::Final);
    ensure(step.current_edge().is_some() == expects_edge, fixture, || {
        format!("step {i}: current edge presence does not match {}", step.status())
    })?;
    if let (Some(edge), Some(index)) = (step.current_edge(), step.current_index()) {
        ensure(step.sorted_edges().get(index) == Some(edge), fixture, || {
            format!("step {i}: current index {index} does not point at {edge}")
        })?;
    }
    Ok(())
}

/// Rebuilds the partition from the step's own accepted edges and compares
/// its component count with the roots in the recorded parent snapshot.
fn validate_parent_snapshot(fixture: &KruskalFixture, i: usize, step: &Step<usize>) -> TestCaseResult {
    let snapshot = step.parents();
    ensure(snapshot.len() == fixture.node_count, fixture, || {
        format!("step {i}: snapshot covers {} nodes", snapshot.len())
    })?;

    let roots = (0..fixture.node_count)
        .filter(|node| snapshot.is_root(node))
        .count();
    let expected = fixture.node_count - step.mst_edges().len();
    ensure(roots == expected, fixture, || {
        format!("step {i}: snapshot has {roots} roots, expected {expected}")
    })?;

    let mut parent = snapshot.indices().to_vec();
    for edge in step.mst_edges() {
        let ra = find_root(&mut parent, *edge.u());
        let rb = find_root(&mut parent, *edge.v());
        ensure(ra == rb, fixture, || {
            format!("step {i}: accepted edge {edge} spans two snapshot components")
        })?;
    }
    Ok(())
}

fn validate_sorted(fixture: &KruskalFixture, step: &Step<usize>) -> TestCaseResult {
    let sorted = step.sorted_edges();
    ensure(sorted.len() == fixture.edges.len(), fixture, || {
        format!("sorted edges has {} entries", sorted.len())
    })?;
    for (i, pair) in sorted.windows(2).enumerate() {
        ensure(
            fixture.mode.compare(pair[0].weight(), pair[1].weight()).is_le(),
            fixture,
            || format!("sorted edges out of order at {i}: {} then {}", pair[0], pair[1]),
        )?;
    }
    Ok(())
}
