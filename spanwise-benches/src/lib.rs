//! Benchmark support crate for spanwise.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for edge ordering, the disjoint set, and the traced
//! Kruskal runner.

pub mod error;
pub mod params;
pub mod source;
