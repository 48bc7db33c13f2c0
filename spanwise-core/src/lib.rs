//! spanwise core library.
//!
//! Computes minimum or maximum spanning forests with Kruskal's algorithm and
//! records every decision as an immutable [`Step`] in a [`Trace`], so a
//! renderer, test harness or logger can replay the run.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod kruskal;
mod ordering;
mod trace;
mod union_find;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, KruskalError, KruskalErrorCode, Result},
    graph::{Edge, Graph, NodeId},
    kruskal::{Kruskal, KruskalBuilder, SpanningForest, kruskal, run_kruskal},
    ordering::{OptimizationMode, order_edges},
    trace::{ParentSnapshot, Step, StepStatus, Trace},
    union_find::DisjointSet,
};
