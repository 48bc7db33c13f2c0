//! Benchmark parameter types.

use std::fmt;

use spanwise_core::OptimizationMode;

/// Parameters for a Kruskal benchmark run.
#[derive(Clone, Debug)]
pub struct KruskalBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
    /// Optimisation direction.
    pub mode: OptimizationMode,
}

impl fmt::Display for KruskalBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},m={},{}",
            self.node_count, self.edge_count, self.mode
        )
    }
}

/// Parameters for a disjoint-set benchmark run.
#[derive(Clone, Debug)]
pub struct DisjointSetBenchParams {
    /// Number of elements in the set.
    pub len: usize,
}

impl fmt::Display for DisjointSetBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.len)
    }
}
