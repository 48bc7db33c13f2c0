//! Property 2: Structural invariant verification.
//!
//! For any forest produced by the runner, verifies:
//!
//! - **Acyclicity**: no subset of accepted edges forms a cycle.
//! - **Edge count**: `V - C` edges for `C` connected components.
//! - **No self-loops**: self-loops are never selected.
//! - **Provenance**: every accepted edge is an edge of the input graph.
//! - **Early exit**: nothing is evaluated after the tree is complete.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, SpanningForest, StepStatus};

use super::helpers::{ensure, find_root, run_fixture};
use super::types::KruskalFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &KruskalFixture) -> TestCaseResult {
    let forest = run_fixture(fixture)?;

    validate_no_self_loops(fixture, forest.edges())?;
    validate_provenance(fixture, forest.edges())?;
    validate_acyclicity(fixture, forest.edges())?;
    ensure(
        forest.edges().len() == fixture.node_count.saturating_sub(forest.component_count()),
        fixture,
        || {
            format!(
                "edge count {} differs from n - c = {} - {}",
                forest.edges().len(),
                fixture.node_count,
                forest.component_count()
            )
        },
    )?;
    validate_early_exit(fixture, &forest)
}

fn validate_no_self_loops(fixture: &KruskalFixture, edges: &[Edge<usize>]) -> TestCaseResult {
    for (i, edge) in edges.iter().enumerate() {
        ensure(!edge.is_self_loop(), fixture, || {
            format!("edge {i}: self-loop on node {} selected", edge.u())
        })?;
    }
    Ok(())
}

fn validate_provenance(fixture: &KruskalFixture, edges: &[Edge<usize>]) -> TestCaseResult {
    let mut remaining = fixture.edges.clone();
    for edge in edges {
        let Some(position) = remaining.iter().position(|candidate| candidate == edge) else {
            return Err(TestCaseError::fail(format!(
                "accepted edge {edge} is not an unused input edge ({})",
                fixture.describe()
            )));
        };
        remaining.swap_remove(position);
    }
    Ok(())
}

fn validate_acyclicity(fixture: &KruskalFixture, edges: &[Edge<usize>]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..fixture.node_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let ra = find_root(&mut parent, *edge.u());
        let rb = find_root(&mut parent, *edge.v());
        ensure(ra != rb, fixture, || {
            format!("edge {i}: {edge} creates a cycle")
        })?;
        parent[rb] = ra;
    }
    Ok(())
}

/// When the forest is a complete tree the last evaluated edge must be the
/// one that completed it; otherwise every sorted edge must be evaluated.
fn validate_early_exit(fixture: &KruskalFixture, forest: &SpanningForest<usize>) -> TestCaseResult {
    let trace = forest.trace();
    let evaluated = trace.count(StepStatus::Evaluating);
    let complete = fixture.node_count > 0
        && forest.edges().len() == fixture.node_count.saturating_sub(1);

    if !complete || forest.edges().is_empty() {
        return ensure(evaluated == fixture.edges.len(), fixture, || {
            format!(
                "incomplete forest evaluated {evaluated} of {} edges",
                fixture.edges.len()
            )
        });
    }

    let last_decision = trace
        .iter()
        .rev()
        .find(|step| step.status() != StepStatus::Final)
        .map(|step| step.status());
    ensure(last_decision == Some(StepStatus::Accepted), fixture, || {
        format!("tree completed but the last decision was {last_decision:?}")
    })
}
