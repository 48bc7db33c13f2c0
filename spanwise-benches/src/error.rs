//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! setup functions can propagate failures with `?`.

use spanwise_core::{GraphError, KruskalError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated graph failed validation.
    #[error("graph validation failed: {0}")]
    Graph(#[from] GraphError),
    /// The runner failed during a warm-up run.
    #[error("kruskal run failed: {0}")]
    Kruskal(#[from] KruskalError),
}
