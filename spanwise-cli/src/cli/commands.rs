//! Command implementations and argument parsing for the spanwise CLI.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use spanwise_core::{
    Edge, Graph, GraphError, KruskalBuilder, KruskalError, OptimizationMode, SpanningForest,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::{EdgeListError, parse_edge_list};

/// Name reported for the built-in sample graph.
const DEMO_SOURCE: &str = "demo";

/// Edges of the built-in six-node sample graph.
const DEMO_EDGES: &[(&str, &str, f64)] = &[
    ("A", "B", 4.0),
    ("A", "C", 2.0),
    ("B", "C", 1.0),
    ("B", "D", 5.0),
    ("C", "D", 8.0),
    ("C", "E", 10.0),
    ("D", "E", 2.0),
    ("D", "F", 6.0),
    ("E", "F", 3.0),
];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwise",
    about = "Trace Kruskal spanning-tree construction step by step."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Trace a run over an edge-list file.
    Run(RunCommand),
    /// Trace a run over the built-in six-node sample graph.
    Demo(DemoCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a UTF-8 edge list (`<U> <V> <WEIGHT>` or `node <ID>` per line).
    pub path: PathBuf,

    /// Optimisation direction.
    #[command(flatten)]
    pub mode: ModeArgs,
}

/// Options accepted by the `demo` command.
#[derive(Debug, Args, Clone)]
pub struct DemoCommand {
    /// Optimisation direction.
    #[command(flatten)]
    pub mode: ModeArgs,
}

/// Flags selecting the optimisation direction.
#[derive(Debug, Args, Clone, Copy, Default)]
pub struct ModeArgs {
    /// Build a maximum spanning tree instead of a minimum one.
    #[arg(long)]
    pub maximize: bool,
}

impl ModeArgs {
    /// Returns the selected [`OptimizationMode`].
    #[must_use]
    pub const fn mode(self) -> OptimizationMode {
        OptimizationMode::from_minimize(!self.maximize)
    }
}

/// Errors surfaced while executing CLI commands.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the input file failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file was not a well-formed edge list.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parse failure with its line number.
        #[source]
        source: EdgeListError,
    },
    /// Graph validation or the run itself failed.
    #[error(transparent)]
    Core(#[from] KruskalError),
}

impl CliError {
    /// Stable machine-readable code for logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::Parse { source, .. } => source.code(),
            Self::Core(core) => core.code().as_str(),
        }
    }
}

impl From<GraphError> for CliError {
    fn from(error: GraphError) -> Self {
        Self::Core(KruskalError::from(error))
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Input file stem, or `demo` for the built-in graph.
    pub source: String,
    /// Forest and trace produced by the run.
    pub forest: SpanningForest<String>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, validation or the run fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{Cli, Command, ModeArgs, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A B 1\nB C 2\nA C 3\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         mode: ModeArgs::default(),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.total_weight(), 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(&run)
        }
        Command::Demo(demo) => {
            span.record("command", field::display("demo"));
            execute(DEMO_SOURCE.to_owned(), &demo_graph()?, demo.mode.mode())
        }
    }
}

#[instrument(
    name = "cli.execute_file",
    err,
    skip(command),
    fields(path = field::Empty, mode = %command.mode.mode()),
)]
pub(super) fn run_command(command: &RunCommand) -> Result<ExecutionSummary, CliError> {
    Span::current().record("path", field::display(command.path.display()));
    let graph = load_graph(&command.path)?;
    execute(
        derive_source_name(&command.path),
        &graph,
        command.mode.mode(),
    )
}

#[instrument(name = "cli.load_graph", err, skip(path), fields(path = field::Empty))]
pub(super) fn load_graph(path: &Path) -> Result<Graph<String>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let list = parse_edge_list(&contents).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(list.into_graph()?)
}

fn execute(
    source: String,
    graph: &Graph<String>,
    mode: OptimizationMode,
) -> Result<ExecutionSummary, CliError> {
    let forest = KruskalBuilder::new().with_mode(mode).build().run(graph)?;
    info!(
        source = source.as_str(),
        accepted = forest.edges().len(),
        total_weight = forest.total_weight(),
        components = forest.component_count(),
        "command completed"
    );
    Ok(ExecutionSummary { source, forest })
}

pub(super) fn derive_source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "edge_list".to_owned(), ToOwned::to_owned)
}

/// Builds the six-node sample graph used by the `demo` command.
///
/// # Examples
/// ```
/// use spanwise_cli::cli::demo_graph;
///
/// let graph = demo_graph()?;
/// assert_eq!(graph.node_count(), 6);
/// assert_eq!(graph.edge_count(), 9);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
///
/// # Errors
/// Propagates [`GraphError`] from graph validation.
pub fn demo_graph() -> Result<Graph<String>, GraphError> {
    let edges = DEMO_EDGES
        .iter()
        .map(|&(u, v, weight)| Edge::new(u.to_owned(), v.to_owned(), weight));
    Graph::from_edges(edges)
}
