//! Error types for the spanwise core library.
//!
//! Defines the graph validation and runner error enums exposed by the public
//! API together with their stable machine-readable codes.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error raised while validating a [`crate::Graph`] at construction time.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a node that is not part of the node set.
    #[error("edge {edge_index} references unknown node `{node}`")]
    UnknownNode {
        /// Display form of the missing node.
        node: Arc<str>,
        /// Position of the offending edge in the input edge list.
        edge_index: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {edge_index} has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Position of the offending edge in the input edge list.
        edge_index: usize,
        /// The rejected weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a node that is not part of the node set.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}

/// Error type produced while running Kruskal's algorithm.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum KruskalError {
    /// The supplied nodes and edges did not form a valid graph.
    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
    /// A disjoint-set query used an index outside the node range.
    #[error("node index {node} is out of range for {node_count} nodes")]
    InvalidNodeId {
        /// The rejected node index.
        node: usize,
        /// Number of nodes tracked by the disjoint set.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`KruskalError`] variants.
    enum KruskalErrorCode for KruskalError {
        /// The supplied nodes and edges did not form a valid graph.
        InvalidGraph => Graph(..) => "KRUSKAL_INVALID_GRAPH",
        /// A disjoint-set query used an index outside the node range.
        InvalidNodeId => InvalidNodeId { .. } => "KRUSKAL_INVALID_NODE_ID",
    }
}

impl KruskalError {
    /// Retrieve the inner [`GraphErrorCode`] when the error came from graph validation.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            Self::InvalidNodeId { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, KruskalError>;
