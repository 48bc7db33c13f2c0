//! Traced Kruskal spanning tree construction.
//!
//! The runner walks the edges in the order chosen by
//! [`crate::OptimizationMode`], uses a [`DisjointSet`] to reject edges that
//! would close a cycle, and records a [`crate::Step`] for every point of
//! interest.
//! A disconnected input yields a spanning forest rather than an error.

mod recorder;

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    error::{GraphError, KruskalError, Result},
    graph::{Edge, Graph, NodeId},
    ordering::{OptimizationMode, order_edges},
    trace::{StepStatus, Trace},
    union_find::DisjointSet,
};

use self::recorder::Recorder;

/// The outcome of a traced Kruskal run.
///
/// When the input graph is connected the forest is a spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest<N: NodeId> {
    edges: Vec<Edge<N>>,
    total_weight: f64,
    node_count: usize,
    component_count: usize,
    mode: OptimizationMode,
    trace: Trace<N>,
}

impl<N: NodeId> SpanningForest<N> {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<N>] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of nodes in the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of connected components left after the run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the mode the forest was built with.
    #[must_use]
    #[rustfmt::skip]
    pub const fn mode(&self) -> OptimizationMode { self.mode }

    /// Returns the full ordered trace of the run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn trace(&self) -> &Trace<N> { &self.trace }

    /// Returns `true` when the accepted edges span every node in one tree.
    ///
    /// Graphs with zero or one node trivially form a tree with no edges.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count <= 1 && self.edges.len() == self.node_count.saturating_sub(1)
    }

    /// Consumes the forest, returning `(edges, total_weight, trace)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge<N>>, f64, Trace<N>) {
        (self.edges, self.total_weight, self.trace)
    }
}

/// Runs Kruskal's algorithm with the conventional `minimize` flag.
///
/// # Errors
/// Returns [`KruskalError::InvalidNodeId`] only if the graph's internal node
/// index is inconsistent; validated graphs never trigger it.
///
/// # Examples
/// ```
/// use spanwise_core::{Edge, Graph, kruskal};
///
/// let graph = Graph::from_edges(vec![
///     Edge::new("A", "B", 4.0),
///     Edge::new("A", "C", 2.0),
///     Edge::new("B", "C", 1.0),
/// ])?;
/// let forest = kruskal(&graph, true)?;
/// assert_eq!(forest.total_weight(), 3.0);
/// assert!(forest.is_spanning_tree());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn kruskal<N: NodeId>(graph: &Graph<N>, minimize: bool) -> Result<SpanningForest<N>> {
    run_kruskal(graph, OptimizationMode::from_minimize(minimize))
}

/// Runs Kruskal's algorithm over `graph` in the given `mode`, recording a
/// [`crate::Step`] for the start, every evaluation, acceptance and rejection, and
/// the end of the run.
///
/// Processing stops as soon as `node_count - 1` edges have been accepted;
/// later edges are never evaluated.
///
/// # Errors
/// Returns [`KruskalError::InvalidNodeId`] only if the graph's internal node
/// index is inconsistent; validated graphs never trigger it.
#[instrument(
    name = "kruskal.run",
    err,
    skip_all,
    fields(nodes = graph.node_count(), edges = graph.edge_count(), mode = %mode),
)]
pub fn run_kruskal<N: NodeId>(
    graph: &Graph<N>,
    mode: OptimizationMode,
) -> Result<SpanningForest<N>> {
    let node_count = graph.node_count();
    let target_edges = node_count.saturating_sub(1);
    let mut union_find = DisjointSet::new(node_count);
    let sorted: Arc<[Edge<N>]> = order_edges(graph.edges(), mode).into();
    let mut recorder = Recorder::new(graph.node_index(), Arc::clone(&sorted));

    let mut accepted: Vec<Edge<N>> = Vec::with_capacity(target_edges);
    let mut total_weight = 0.0_f64;

    recorder.emit(
        StepStatus::Initial,
        None,
        &accepted,
        total_weight,
        &union_find,
        format!(
            "Start: {} edges sorted to build a {mode} spanning tree",
            sorted.len()
        ),
    );

    for (position, edge) in sorted.iter().enumerate() {
        let current = Some((position, edge));
        recorder.emit(
            StepStatus::Evaluating,
            current,
            &accepted,
            total_weight,
            &union_find,
            format!(
                "Evaluating edge ({}, {}) with weight {}",
                edge.u(),
                edge.v(),
                edge.weight()
            ),
        );

        let u = endpoint(graph, edge.u(), position)?;
        let v = endpoint(graph, edge.v(), position)?;
        let root_u = union_find.find(u)?;
        let root_v = union_find.find(v)?;

        if root_u == root_v {
            debug!(u = %edge.u(), v = %edge.v(), weight = edge.weight(), "edge rejected");
            recorder.emit(
                StepStatus::Rejected,
                current,
                &accepted,
                total_weight,
                &union_find,
                format!(
                    "Edge ({}, {}) rejected: it would form a cycle",
                    edge.u(),
                    edge.v()
                ),
            );
            continue;
        }

        let merged = union_find.union(u, v)?;
        debug_assert!(merged, "distinct roots must merge");
        accepted.push(edge.clone());
        total_weight += edge.weight();
        debug!(
            u = %edge.u(),
            v = %edge.v(),
            weight = edge.weight(),
            total_weight,
            "edge accepted"
        );
        recorder.emit(
            StepStatus::Accepted,
            current,
            &accepted,
            total_weight,
            &union_find,
            format!(
                "Edge ({}, {}) accepted: it connects separate components",
                edge.u(),
                edge.v()
            ),
        );

        if accepted.len() == target_edges {
            break;
        }
    }

    let component_count = union_find.components();
    let message = final_message(
        mode,
        accepted.len(),
        node_count,
        component_count,
        total_weight,
    );
    recorder.emit(
        StepStatus::Final,
        None,
        &accepted,
        total_weight,
        &union_find,
        message,
    );

    info!(
        accepted = accepted.len(),
        total_weight,
        components = component_count,
        "kruskal run completed"
    );

    Ok(SpanningForest {
        edges: accepted,
        total_weight,
        node_count,
        component_count,
        mode,
        trace: recorder.finish(),
    })
}

fn endpoint<N: NodeId>(graph: &Graph<N>, node: &N, edge_index: usize) -> Result<usize> {
    graph.index_of(node).ok_or_else(|| {
        KruskalError::Graph(GraphError::UnknownNode {
            node: Arc::from(node.to_string()),
            edge_index,
        })
    })
}

fn final_message(
    mode: OptimizationMode,
    accepted: usize,
    node_count: usize,
    component_count: usize,
    total_weight: f64,
) -> String {
    if component_count <= 1 {
        format!(
            "Finished: {mode} spanning tree with {accepted} edges over {node_count} nodes, \
             total weight {total_weight}"
        )
    } else {
        format!(
            "Finished: graph is disconnected; spanning forest with {accepted} edges over \
             {node_count} nodes in {component_count} components, total weight {total_weight}"
        )
    }
}

/// Configures and constructs [`Kruskal`] runners.
///
/// # Examples
/// ```
/// use spanwise_core::{KruskalBuilder, OptimizationMode};
///
/// let runner = KruskalBuilder::new().with_minimize(false).build();
/// assert_eq!(runner.mode(), OptimizationMode::Maximize);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct KruskalBuilder {
    mode: OptimizationMode,
}

impl KruskalBuilder {
    /// Creates a builder that produces minimum spanning forests.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the optimisation mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: OptimizationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the mode from the conventional `minimize` flag.
    #[must_use]
    pub const fn with_minimize(self, minimize: bool) -> Self {
        self.with_mode(OptimizationMode::from_minimize(minimize))
    }

    /// Returns the configured mode.
    #[must_use]
    #[rustfmt::skip]
    pub const fn mode(&self) -> OptimizationMode { self.mode }

    /// Constructs the runner.
    #[must_use]
    pub const fn build(self) -> Kruskal {
        Kruskal { mode: self.mode }
    }
}

/// A configured Kruskal runner.
#[derive(Clone, Copy, Debug)]
pub struct Kruskal {
    mode: OptimizationMode,
}

impl Kruskal {
    /// Returns the mode used by [`Kruskal::run`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn mode(&self) -> OptimizationMode { self.mode }

    /// Runs the algorithm over an already validated graph.
    ///
    /// # Errors
    /// See [`run_kruskal`].
    pub fn run<N: NodeId>(&self, graph: &Graph<N>) -> Result<SpanningForest<N>> {
        run_kruskal(graph, self.mode)
    }

    /// Validates `nodes` and `edges` into a graph, then runs the algorithm.
    ///
    /// # Errors
    /// Returns [`KruskalError::Graph`] before any step is recorded when the
    /// input is not a valid graph.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::{Edge, KruskalBuilder, KruskalError};
    ///
    /// let runner = KruskalBuilder::new().build();
    /// let err = runner
    ///     .run_edges(["A", "B"], vec![Edge::new("A", "C", 1.0)])
    ///     .expect_err("C is not a node");
    /// assert!(matches!(err, KruskalError::Graph(_)));
    /// ```
    pub fn run_edges<N: NodeId>(
        &self,
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = Edge<N>>,
    ) -> Result<SpanningForest<N>> {
        let graph = Graph::new(nodes, edges)?;
        self.run(&graph)
    }
}


#[cfg(test)]
mod property;
