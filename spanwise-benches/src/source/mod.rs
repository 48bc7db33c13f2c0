//! Seeded synthetic graphs for benchmarks.

mod errors;
mod graph;

pub use errors::SyntheticError;
pub use graph::{SyntheticGraph, SyntheticGraphConfig};
