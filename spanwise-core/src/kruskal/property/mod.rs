//! Property-based tests for the traced Kruskal runner.
//!
//! Verifies the runner against an independent Prim oracle, validates the
//! structural invariants of the forest, checks every trace invariant step by
//! step, and re-runs identical inputs to detect non-determinism.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod structural;
mod trace_invariants;
mod types;
