//! Shared test utilities used across spanwise crates.
//!
//! [`tracing::RecordingLayer`] captures spans and events so suites can assert
//! instrumentation, and [`ci`] centralises environment-driven test tuning.

pub mod ci;
pub mod tracing;
