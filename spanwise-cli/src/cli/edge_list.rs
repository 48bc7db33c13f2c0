//! Plain-text edge-list reader.
//!
//! One record per line; `#` starts a comment and blank lines are skipped.
//! `node <ID>` declares a node (possibly isolated) and `<U> <V> <WEIGHT>`
//! declares an undirected edge. Nodes are listed in order of first
//! appearance. Weight finiteness is left to graph validation.

use std::collections::HashSet;
use std::num::ParseFloatError;

use spanwise_core::{Edge, Graph, GraphError};
use thiserror::Error;

const NODE_KEYWORD: &str = "node";

/// Errors raised while parsing an edge list. Line numbers are 1-based.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EdgeListError {
    /// A record ended before every required field was present.
    #[error("line {line}: missing {field}")]
    MissingField {
        /// Line containing the record.
        line: usize,
        /// Name of the first missing field.
        field: &'static str,
    },
    /// The weight field was not a number.
    #[error("line {line}: invalid weight `{raw}`: {source}")]
    InvalidWeight {
        /// Line containing the record.
        line: usize,
        /// The rejected text.
        raw: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
    /// A record carried more fields than its kind accepts.
    #[error("line {line}: unexpected field `{field}`")]
    UnexpectedField {
        /// Line containing the record.
        line: usize,
        /// The first surplus field.
        field: String,
    },
}

impl EdgeListError {
    /// Stable machine-readable code for logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "EDGE_LIST_MISSING_FIELD",
            Self::InvalidWeight { .. } => "EDGE_LIST_INVALID_WEIGHT",
            Self::UnexpectedField { .. } => "EDGE_LIST_UNEXPECTED_FIELD",
        }
    }

    /// Line the error was found on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::MissingField { line, .. }
            | Self::InvalidWeight { line, .. }
            | Self::UnexpectedField { line, .. } => *line,
        }
    }
}

/// Parsed but not yet validated graph input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeList {
    nodes: Vec<String>,
    seen: HashSet<String>,
    edges: Vec<Edge<String>>,
}

impl EdgeList {
    /// Returns the nodes in order of first appearance.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[String] { &self.nodes }

    /// Returns the edges in file order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<String>] { &self.edges }

    /// Validates the records into a [`Graph`].
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] when an edge weight is NaN or
    /// infinite.
    pub fn into_graph(self) -> Result<Graph<String>, GraphError> {
        Graph::new(self.nodes, self.edges)
    }

    fn declare(&mut self, node: &str) {
        if !self.seen.contains(node) {
            self.seen.insert(node.to_owned());
            self.nodes.push(node.to_owned());
        }
    }
}

/// Parses `input` into an [`EdgeList`].
///
/// # Errors
/// Returns [`EdgeListError`] for the first malformed record.
///
/// # Examples
/// ```
/// use spanwise_cli::cli::parse_edge_list;
///
/// let list = parse_edge_list("# triangle\nA B 1\nB C 2.5\nnode D\n")?;
/// assert_eq!(list.nodes(), ["A", "B", "C", "D"]);
/// assert_eq!(list.edges().len(), 2);
/// # Ok::<(), spanwise_cli::cli::EdgeListError>(())
/// ```
pub fn parse_edge_list(input: &str) -> Result<EdgeList, EdgeListError> {
    let mut list = EdgeList::default();
    for (offset, raw) in input.lines().enumerate() {
        let line = offset + 1;
        let content = raw.split_once('#').map_or(raw, |(before, _)| before);
        let mut fields = content.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };

        if first == NODE_KEYWORD {
            let id = fields.next().ok_or(EdgeListError::MissingField {
                line,
                field: "node id",
            })?;
            reject_surplus(fields.next(), line)?;
            list.declare(id);
            continue;
        }

        let target = fields.next().ok_or(EdgeListError::MissingField {
            line,
            field: "target node",
        })?;
        let raw_weight = fields.next().ok_or(EdgeListError::MissingField {
            line,
            field: "weight",
        })?;
        reject_surplus(fields.next(), line)?;
        let weight = raw_weight
            .parse::<f64>()
            .map_err(|source| EdgeListError::InvalidWeight {
                line,
                raw: raw_weight.to_owned(),
                source,
            })?;

        list.declare(first);
        list.declare(target);
        list.edges
            .push(Edge::new(first.to_owned(), target.to_owned(), weight));
    }
    Ok(list)
}

fn reject_surplus(extra: Option<&str>, line: usize) -> Result<(), EdgeListError> {
    match extra {
        Some(field) => Err(EdgeListError::UnexpectedField {
            line,
            field: field.to_owned(),
        }),
        None => Ok(()),
    }
}
