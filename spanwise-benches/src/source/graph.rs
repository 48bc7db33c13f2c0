//! Connected random graph generator.
//!
//! Builds a random spanning tree over `0..node_count` and then adds extra
//! random edges, so every generated graph is connected and the runner
//! always has cycles to reject. Weights are integers drawn uniformly from
//! the configured range.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanwise_core::{Edge, Graph};

use super::SyntheticError;

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Extra edges per node added on top of the spanning tree.
    pub extra_edges_per_node: usize,
    /// Smallest edge weight.
    pub min_weight: u32,
    /// Largest edge weight.
    pub max_weight: u32,
    /// RNG seed.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Config with weights in `1..=1000` and the given size and seed.
    #[must_use]
    pub const fn new(node_count: usize, extra_edges_per_node: usize, seed: u64) -> Self {
        Self {
            node_count,
            extra_edges_per_node,
            min_weight: 1,
            max_weight: 1_000,
            seed,
        }
    }
}

/// A generated edge list over `0..node_count`.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    node_count: usize,
    edges: Vec<Edge<usize>>,
}

impl SyntheticGraph {
    /// Generates a connected graph from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the node count is zero or the weight
    /// range is empty.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        if config.node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }
        if config.min_weight > config.max_weight {
            return Err(SyntheticError::InvalidWeightRange {
                min_weight: config.min_weight,
                max_weight: config.max_weight,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let weights = config.min_weight..=config.max_weight;
        let extra = config.node_count.saturating_mul(config.extra_edges_per_node);
        let mut edges = Vec::with_capacity(config.node_count.saturating_add(extra));

        for node in 1..config.node_count {
            let parent = rng.gen_range(0..node);
            let weight = f64::from(rng.gen_range(weights.clone()));
            edges.push(Edge::new(parent, node, weight));
        }
        for _ in 0..extra {
            let u = rng.gen_range(0..config.node_count);
            let v = rng.gen_range(0..config.node_count);
            let weight = f64::from(rng.gen_range(weights.clone()));
            edges.push(Edge::new(u, v, weight));
        }

        Ok(Self {
            node_count: config.node_count,
            edges,
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the generated edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge<usize>] {
        &self.edges
    }

    /// Validates the edge list into a [`Graph`].
    ///
    /// # Errors
    /// Propagates [`spanwise_core::GraphError`]; generated graphs never
    /// trigger it.
    pub fn to_graph(&self) -> Result<Graph<usize>, spanwise_core::GraphError> {
        Graph::new(0..self.node_count, self.edges.iter().cloned())
    }
}
