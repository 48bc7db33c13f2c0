//! Error types for synthetic benchmark graph generation.

/// Errors that may occur while generating benchmark graphs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The requested weight range was empty.
    #[error("invalid weight range: min={min_weight}, max={max_weight}")]
    InvalidWeightRange {
        /// Smallest weight requested.
        min_weight: u32,
        /// Largest weight requested.
        max_weight: u32,
    },
}
