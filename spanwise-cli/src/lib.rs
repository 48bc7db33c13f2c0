//! Support library for the spanwise CLI binary.
//!
//! Exposes the command pipeline and logging setup so doctests and tests can
//! drive a run without forking a subprocess.

pub mod cli;
pub mod logging;
