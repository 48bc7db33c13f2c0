//! Command-line interface orchestration for spanwise.
//!
//! `run` loads a plain-text edge list and `demo` uses the built-in six-node
//! sample graph; both execute the traced Kruskal runner and hand the result
//! to the renderer.

mod commands;
mod edge_list;
mod render;

pub use commands::{
    Cli, CliError, Command, DemoCommand, ExecutionSummary, ModeArgs, RunCommand, demo_graph,
    run_cli,
};
pub use edge_list::{EdgeList, EdgeListError, parse_edge_list};
pub use render::{render_report, render_summary, render_trace};
