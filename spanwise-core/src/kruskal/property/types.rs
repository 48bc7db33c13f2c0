//! Type definitions for Kruskal property-based tests.
//!
//! Provides the fixture, configuration, and graph shape types used by the
//! generation strategies and property functions.

use test_strategy::Arbitrary;

use crate::{Edge, Graph, OptimizationMode};

/// Shape of the generated graph.
///
/// Each shape stresses a different part of the runner: tie handling, early
/// exit, forest reporting, or cycle rejection of degenerate edges.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Every edge has a distinct weight.
    #[weight(2)]
    Unique,
    /// Large groups of edges share identical weights.
    #[weight(3)]
    ManyIdentical,
    /// A random spanning tree plus a handful of extra edges.
    #[weight(2)]
    Sparse,
    /// Close to a complete graph.
    #[weight(2)]
    Dense,
    /// Several components with no edges between them.
    #[weight(2)]
    Disconnected,
    /// Ordinary edges mixed with self-loops and parallel edges.
    #[weight(2)]
    Degenerate,
}

/// Fixture for Kruskal property tests.
///
/// Captures the generated graph alongside the shape and mode used, providing
/// full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct KruskalFixture {
    /// Number of nodes; nodes are `0..node_count`.
    pub node_count: usize,
    /// Generated edges in insertion order.
    pub edges: Vec<Edge<usize>>,
    /// Shape used during generation.
    pub shape: GraphShape,
    /// Mode the runner is exercised with.
    pub mode: OptimizationMode,
}

impl KruskalFixture {
    /// Builds the validated graph for this fixture.
    pub(super) fn graph(&self) -> Graph<usize> {
        Graph::new(0..self.node_count, self.edges.clone())
            .expect("generated fixtures only reference existing nodes")
    }

    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "shape={:?}, mode={}, nodes={}, edges={}",
            self.shape,
            self.mode,
            self.node_count,
            self.edges.len(),
        )
    }
}

/// Configuration for the determinism property.
pub(super) struct DeterminismConfig {
    /// Number of times to repeat the run per input.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Loads the configuration from the environment.
    ///
    /// `SPANWISE_KRUSKAL_PBT_REPS` controls the repetition count (default: 3).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("SPANWISE_KRUSKAL_PBT_REPS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3);
        Self { repetitions }
    }
}
