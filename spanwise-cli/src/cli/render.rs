//! Text rendering of traces and run summaries.

use std::io::{self, Write};

use spanwise_core::{Edge, Step, Trace};

use super::commands::ExecutionSummary;

/// Renders the trace followed by the summary.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn render_report(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    render_trace(summary.forest.trace(), &mut writer)?;
    writeln!(writer)?;
    render_summary(summary, &mut writer)
}

/// Renders one block per step: the status line, the running weight, and
/// the current edge when there is one.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{demo_graph, render_trace};
/// # use spanwise_core::kruskal;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let forest = kruskal(&demo_graph()?, true)?;
/// let mut buffer = Vec::new();
/// render_trace(forest.trace(), &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("step 1/14 [initial] Start:"));
/// assert!(text.contains("  edge: B-C (1)"));
/// # Ok(())
/// # }
/// ```
pub fn render_trace(trace: &Trace<String>, mut writer: impl Write) -> io::Result<()> {
    let total = trace.len();
    for (offset, step) in trace.iter().enumerate() {
        render_step(offset + 1, total, step, &mut writer)?;
    }
    Ok(())
}

fn render_step(
    number: usize,
    total: usize,
    step: &Step<String>,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        writer,
        "step {number}/{total} [{}] {}",
        step.status(),
        step.message()
    )?;
    writeln!(writer, "  weight: {}", step.total_weight())?;
    if let Some(edge) = step.current_edge() {
        writeln!(writer, "  edge: {}", edge_label(edge))?;
    }
    Ok(())
}

/// Renders the accepted edges, the total weight and whether the result is
/// a tree or a forest.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let forest = &summary.forest;
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "mode: {}", forest.mode())?;
    writeln!(writer, "accepted edges: {}", forest.edges().len())?;
    for edge in forest.edges() {
        writeln!(writer, "  {}", edge_label(edge))?;
    }
    writeln!(writer, "total weight: {}", forest.total_weight())?;
    if forest.component_count() <= 1 {
        writeln!(writer, "result: tree")
    } else {
        writeln!(
            writer,
            "result: forest ({} components)",
            forest.component_count()
        )
    }
}

fn edge_label(edge: &Edge<String>) -> String {
    format!("{}-{} ({})", edge.u(), edge.v(), edge.weight())
}
