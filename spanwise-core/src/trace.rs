//! Append-only trace of Kruskal decisions.
//!
//! Each [`Step`] is a value snapshot: it owns its own copy of the accepted
//! edges and of the disjoint-set parent links, so later mutation of the live
//! run never changes a step that was already recorded. The sorted edge list
//! is immutable once ordering has run and is shared between steps.

use std::{fmt, slice, sync::Arc};

use crate::graph::{Edge, NodeId, NodeIndex};

/// Kind of event a [`Step`] records.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StepStatus {
    /// Edges are sorted and nothing has been evaluated yet.
    Initial,
    /// An edge is about to be checked for a cycle.
    Evaluating,
    /// The evaluated edge joined two components and was selected.
    Accepted,
    /// The evaluated edge would have closed a cycle.
    Rejected,
    /// The run has finished.
    Final,
}

impl StepStatus {
    /// Returns a stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Evaluating => "evaluating",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Final => "final",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Copy of the disjoint-set parent mapping at one point of a run.
#[derive(Clone)]
pub struct ParentSnapshot<N> {
    index: Arc<NodeIndex<N>>,
    parents: Vec<usize>,
}

impl<N: NodeId> ParentSnapshot<N> {
    pub(crate) fn capture(index: &Arc<NodeIndex<N>>, parents: &[usize]) -> Self {
        Self {
            index: Arc::clone(index),
            parents: parents.to_vec(),
        }
    }

    /// Returns the recorded parent of `node`, or `None` for unknown nodes.
    #[must_use]
    pub fn parent_of(&self, node: &N) -> Option<&N> {
        let position = self.index.position(node)?;
        let parent = *self.parents.get(position)?;
        self.index.node(parent)
    }

    /// Returns `true` when `node` was its own parent at capture time.
    #[must_use]
    pub fn is_root(&self, node: &N) -> bool {
        self.parent_of(node) == Some(node)
    }

    /// Iterates `(node, parent)` pairs in node insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.index
            .nodes()
            .iter()
            .zip(&self.parents)
            .filter_map(|(node, &parent)| Some((node, self.index.node(parent)?)))
    }

    /// Returns the raw parent indices in node insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn indices(&self) -> &[usize] { &self.parents }

    /// Returns the number of nodes covered by the snapshot.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parents.len() }

    /// Returns `true` when the snapshot covers no nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parents.is_empty() }
}

impl<N: NodeId> fmt::Debug for ParentSnapshot<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<N: NodeId> PartialEq for ParentSnapshot<N> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

/// One immutable moment of a Kruskal run.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<N: NodeId> {
    pub(crate) sorted_edges: Arc<[Edge<N>]>,
    pub(crate) current_edge: Option<Edge<N>>,
    pub(crate) current_index: Option<usize>,
    pub(crate) mst_edges: Vec<Edge<N>>,
    pub(crate) total_weight: f64,
    pub(crate) parents: ParentSnapshot<N>,
    pub(crate) status: StepStatus,
    pub(crate) message: String,
}

impl<N: NodeId> Step<N> {
    /// Returns the full ordered edge sequence of the run.
    #[must_use]
    pub fn sorted_edges(&self) -> &[Edge<N>] {
        &self.sorted_edges
    }

    /// Returns the edge under evaluation, if any.
    #[must_use]
    pub const fn current_edge(&self) -> Option<&Edge<N>> {
        self.current_edge.as_ref()
    }

    /// Returns the position of [`Step::current_edge`] within the sorted edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn current_index(&self) -> Option<usize> { self.current_index }

    /// Returns the edges accepted up to this step, in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn mst_edges(&self) -> &[Edge<N>] { &self.mst_edges }

    /// Returns the sum of [`Step::mst_edges`] weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the disjoint-set parent links captured at this step.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parents(&self) -> &ParentSnapshot<N> { &self.parents }

    /// Returns the kind of event recorded.
    #[must_use]
    #[rustfmt::skip]
    pub const fn status(&self) -> StepStatus { self.status }

    /// Returns the human-readable description of the event.
    #[must_use]
    #[rustfmt::skip]
    pub fn message(&self) -> &str { &self.message }
}

/// Ordered, append-only sequence of [`Step`] snapshots.
///
/// Only the runner appends; consumers receive the trace read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace<N: NodeId> {
    steps: Vec<Step<N>>,
}

impl<N: NodeId> Trace<N> {
    pub(crate) const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: Step<N>) {
        self.steps.push(step);
    }

    /// Returns the recorded steps in emission order.
    #[must_use]
    #[rustfmt::skip]
    pub fn steps(&self) -> &[Step<N>] { &self.steps }

    /// Returns the number of steps.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.steps.len() }

    /// Returns `true` when nothing was recorded.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }

    /// Returns the step at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Step<N>> {
        self.steps.get(index)
    }

    /// Returns the first step.
    #[must_use]
    pub fn first(&self) -> Option<&Step<N>> {
        self.steps.first()
    }

    /// Returns the last step.
    #[must_use]
    pub fn last(&self) -> Option<&Step<N>> {
        self.steps.last()
    }

    /// Iterates the steps in emission order.
    pub fn iter(&self) -> slice::Iter<'_, Step<N>> {
        self.steps.iter()
    }

    /// Returns the status of every step in emission order.
    #[must_use]
    pub fn statuses(&self) -> Vec<StepStatus> {
        self.steps.iter().map(Step::status).collect()
    }

    /// Counts steps with the given status.
    #[must_use]
    pub fn count(&self, status: StepStatus) -> usize {
        self.steps.iter().filter(|step| step.status == status).count()
    }
}

impl<'a, N: NodeId> IntoIterator for &'a Trace<N> {
    type Item = &'a Step<N>;
    type IntoIter = slice::Iter<'a, Step<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
