//! Weighted undirected graph consumed by the Kruskal runner.
//!
//! A [`Graph`] owns an insertion-ordered node set and an insertion-ordered
//! edge list. Every node receives a dense index on insertion; the disjoint
//! set and parent snapshots operate on those indices. Graphs are validated
//! once at construction and never mutated afterwards.

use std::{collections::HashMap, fmt, hash::Hash, sync::Arc};

use crate::error::GraphError;

/// Identifier types usable as graph nodes.
///
/// Nodes are opaque to the algorithm: it only needs to hash, compare and
/// clone them. [`fmt::Display`] is required so trace messages can name the
/// endpoints of the edge under evaluation.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// An undirected weighted edge `{u, v}`.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<N> {
    u: N,
    v: N,
    weight: f64,
}

impl<N> Edge<N> {
    /// Creates an edge between `u` and `v`.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::Edge;
    ///
    /// let edge = Edge::new("A", "B", 4.0);
    /// assert_eq!(edge.weight(), 4.0);
    /// ```
    #[must_use]
    pub const fn new(u: N, v: N, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn u(&self) -> &N { &self.u }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v(&self) -> &N { &self.v }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

impl<N: PartialEq> Edge<N> {
    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// Returns `true` when the edge joins `a` and `b`, in either direction.
    #[must_use]
    pub fn connects(&self, a: &N, b: &N) -> bool {
        (self.u == *a && self.v == *b) || (self.u == *b && self.v == *a)
    }
}

impl<N: fmt::Display> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) w={}", self.u, self.v, self.weight)
    }
}

/// Dense index over a node set, shared immutably between the graph and the
/// parent snapshots recorded in a trace.
#[derive(Debug)]
pub(crate) struct NodeIndex<N> {
    nodes: Vec<N>,
    positions: HashMap<N, usize>,
}

impl<N: NodeId> NodeIndex<N> {
    fn from_nodes(nodes: impl IntoIterator<Item = N>) -> Self {
        let mut index = Self {
            nodes: Vec::new(),
            positions: HashMap::new(),
        };
        for node in nodes {
            index.insert(node);
        }
        index
    }

    fn insert(&mut self, node: N) {
        if self.positions.contains_key(&node) {
            return;
        }
        self.positions.insert(node.clone(), self.nodes.len());
        self.nodes.push(node);
    }

    pub(crate) fn position(&self, node: &N) -> Option<usize> {
        self.positions.get(node).copied()
    }

    pub(crate) fn node(&self, position: usize) -> Option<&N> {
        self.nodes.get(position)
    }

    pub(crate) fn nodes(&self) -> &[N] {
        &self.nodes
    }
}

/// A finite, validated, weighted undirected graph.
#[derive(Clone, Debug)]
pub struct Graph<N> {
    index: Arc<NodeIndex<N>>,
    edges: Vec<Edge<N>>,
}

impl<N: NodeId> Graph<N> {
    /// Builds a graph from an explicit node set and an edge list.
    ///
    /// Duplicate nodes collapse onto their first occurrence. Self-loops and
    /// parallel edges are accepted as ordinary entries.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when an edge endpoint is missing
    /// from `nodes`, and [`GraphError::NonFiniteWeight`] when a weight is NaN
    /// or infinite.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::{Edge, Graph};
    ///
    /// let graph = Graph::new(["A", "B", "C"], vec![Edge::new("A", "B", 1.0)])?;
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 1);
    /// # Ok::<(), spanwise_core::GraphError>(())
    /// ```
    pub fn new(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = Edge<N>>,
    ) -> Result<Self, GraphError> {
        let index = NodeIndex::from_nodes(nodes);
        let edges: Vec<Edge<N>> = edges.into_iter().collect();
        for (edge_index, edge) in edges.iter().enumerate() {
            validate_edge(&index, edge_index, edge)?;
        }
        Ok(Self {
            index: Arc::new(index),
            edges,
        })
    }

    /// Builds a graph whose node set is derived from the edge endpoints in
    /// first-seen order.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] when a weight is NaN or
    /// infinite.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::{Edge, Graph};
    ///
    /// let graph = Graph::from_edges(vec![Edge::new('x', 'y', 2.0), Edge::new('y', 'z', 1.0)])?;
    /// assert_eq!(graph.nodes(), &['x', 'y', 'z']);
    /// # Ok::<(), spanwise_core::GraphError>(())
    /// ```
    pub fn from_edges(edges: impl IntoIterator<Item = Edge<N>>) -> Result<Self, GraphError> {
        let edges: Vec<Edge<N>> = edges.into_iter().collect();
        let endpoints = edges
            .iter()
            .flat_map(|edge| [edge.u.clone(), edge.v.clone()]);
        let index = NodeIndex::from_nodes(endpoints);
        for (edge_index, edge) in edges.iter().enumerate() {
            validate_edge(&index, edge_index, edge)?;
        }
        Ok(Self {
            index: Arc::new(index),
            edges,
        })
    }

    /// Returns the nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        self.index.nodes()
    }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<N>] { &self.edges }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.index.nodes().len()
    }

    /// Returns the number of edges, counting self-loops and parallel edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Returns `true` when `node` belongs to the node set.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.index.position(node).is_some()
    }

    /// Returns the dense index assigned to `node`.
    #[must_use]
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.index.position(node)
    }

    pub(crate) fn node_index(&self) -> &Arc<NodeIndex<N>> {
        &self.index
    }
}

fn validate_edge<N: NodeId>(
    index: &NodeIndex<N>,
    edge_index: usize,
    edge: &Edge<N>,
) -> Result<(), GraphError> {
    for endpoint in [&edge.u, &edge.v] {
        if index.position(endpoint).is_none() {
            return Err(GraphError::UnknownNode {
                node: Arc::from(endpoint.to_string()),
                edge_index,
            });
        }
    }
    if !edge.weight.is_finite() {
        return Err(GraphError::NonFiniteWeight {
            edge_index,
            weight: edge.weight,
        });
    }
    Ok(())
}
