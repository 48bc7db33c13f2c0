//! Prim oracle for Kruskal property verification.
//!
//! A dense-matrix Prim's algorithm, run once per connected component, gives
//! an independent reference for the optimal forest weight, the number of
//! selected edges, and the number of components.

use crate::{Edge, OptimizationMode};

/// Result of the Prim oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleResult {
    /// Optimal total weight of the spanning forest.
    pub total_weight: f64,
    /// Number of edges in the spanning forest.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes the optimal spanning forest weight for `mode`.
///
/// Self-loops are ignored and parallel edges collapse onto the preferred
/// weight, neither of which can change the optimum.
pub(super) fn prim_forest(
    node_count: usize,
    edges: &[Edge<usize>],
    mode: OptimizationMode,
) -> OracleResult {
    let matrix = best_weights(node_count, edges, mode);
    let mut in_tree = vec![false; node_count];
    let mut result = OracleResult {
        total_weight: 0.0,
        edge_count: 0,
        component_count: 0,
    };

    for start in 0..node_count {
        if in_tree[start] {
            continue;
        }
        result.component_count += 1;
        let mut frontier: Vec<Option<f64>> = vec![None; node_count];
        in_tree[start] = true;
        relax(&matrix, start, &in_tree, &mut frontier, mode);

        while let Some(next) = pick(&frontier, &in_tree, mode) {
            if let Some(weight) = frontier[next] {
                result.total_weight += weight;
                result.edge_count += 1;
            }
            in_tree[next] = true;
            relax(&matrix, next, &in_tree, &mut frontier, mode);
        }
    }

    result
}

fn best_weights(
    node_count: usize,
    edges: &[Edge<usize>],
    mode: OptimizationMode,
) -> Vec<Vec<Option<f64>>> {
    let mut matrix = vec![vec![None; node_count]; node_count];
    for edge in edges {
        let (a, b) = (*edge.u(), *edge.v());
        if a == b {
            continue;
        }
        let candidate = edge.weight();
        let better = match matrix[a][b] {
            None => true,
            Some(current) => mode.compare(candidate, current).is_lt(),
        };
        if better {
            matrix[a][b] = Some(candidate);
            matrix[b][a] = Some(candidate);
        }
    }
    matrix
}

fn relax(
    matrix: &[Vec<Option<f64>>],
    node: usize,
    in_tree: &[bool],
    frontier: &mut [Option<f64>],
    mode: OptimizationMode,
) {
    for (other, weight) in matrix[node].iter().enumerate() {
        let Some(weight) = *weight else {
            continue;
        };
        if in_tree[other] {
            continue;
        }
        let improves = match frontier[other] {
            None => true,
            Some(current) => mode.compare(weight, current).is_lt(),
        };
        if improves {
            frontier[other] = Some(weight);
        }
    }
}

fn pick(frontier: &[Option<f64>], in_tree: &[bool], mode: OptimizationMode) -> Option<usize> {
    frontier
        .iter()
        .enumerate()
        .filter(|(node, _)| !in_tree[*node])
        .filter_map(|(node, weight)| weight.map(|w| (node, w)))
        .min_by(|left, right| mode.compare(left.1, right.1))
        .map(|(node, _)| node)
}
