//! Step emission for the Kruskal runner.

use std::sync::Arc;

use crate::{
    graph::{Edge, NodeId, NodeIndex},
    trace::{ParentSnapshot, Step, StepStatus, Trace},
    union_find::DisjointSet,
};

/// Builds value snapshots of the live run and appends them to a [`Trace`].
pub(super) struct Recorder<N: NodeId> {
    index: Arc<NodeIndex<N>>,
    sorted: Arc<[Edge<N>]>,
    trace: Trace<N>,
}

impl<N: NodeId> Recorder<N> {
    pub(super) fn new(index: &Arc<NodeIndex<N>>, sorted: Arc<[Edge<N>]>) -> Self {
        Self {
            index: Arc::clone(index),
            sorted,
            trace: Trace::new(),
        }
    }

    /// Copies the accepted edges and parent links into a new step.
    pub(super) fn emit(
        &mut self,
        status: StepStatus,
        current: Option<(usize, &Edge<N>)>,
        accepted: &[Edge<N>],
        total_weight: f64,
        union_find: &DisjointSet,
        message: String,
    ) {
        self.trace.push(Step {
            sorted_edges: Arc::clone(&self.sorted),
            current_edge: current.map(|(_, edge)| edge.clone()),
            current_index: current.map(|(position, _)| position),
            mst_edges: accepted.to_vec(),
            total_weight,
            parents: ParentSnapshot::capture(&self.index, union_find.parents()),
            status,
            message,
        });
    }

    pub(super) fn finish(self) -> Trace<N> {
        self.trace
    }
}
