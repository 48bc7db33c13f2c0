//! Edge ordering policy for Kruskal's greedy selection.

use std::{cmp::Ordering, fmt};

use crate::graph::Edge;

/// Whether the runner builds a minimum or a maximum spanning forest.
///
/// The mode is the single comparator handed to [`order_edges`]; nothing
/// downstream re-derives the direction.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum OptimizationMode {
    /// Select the lightest edges first.
    #[default]
    Minimize,
    /// Select the heaviest edges first.
    Maximize,
}

impl OptimizationMode {
    /// Maps the conventional `minimize` flag onto a mode.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::OptimizationMode;
    ///
    /// assert_eq!(OptimizationMode::from_minimize(false), OptimizationMode::Maximize);
    /// ```
    #[must_use]
    pub const fn from_minimize(minimize: bool) -> Self {
        if minimize {
            Self::Minimize
        } else {
            Self::Maximize
        }
    }

    /// Returns `true` for [`OptimizationMode::Minimize`].
    #[must_use]
    pub const fn is_minimize(self) -> bool {
        matches!(self, Self::Minimize)
    }

    /// Orders two weights so that the preferred weight sorts first.
    #[must_use]
    pub fn compare(self, left: f64, right: f64) -> Ordering {
        match self {
            Self::Minimize => left.total_cmp(&right),
            Self::Maximize => right.total_cmp(&left),
        }
    }

    /// Returns `"minimum"` or `"maximum"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimize => "minimum",
            Self::Maximize => "maximum",
        }
    }
}

impl fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns every edge exactly once, sorted by weight according to `mode`.
///
/// The sort is stable: equal-weight edges keep their insertion order, so
/// identical inputs always produce identical sequences.
///
/// # Examples
/// ```
/// use spanwise_core::{Edge, OptimizationMode, order_edges};
///
/// let edges = vec![Edge::new("a", "b", 3.0), Edge::new("b", "c", 1.0)];
/// let sorted = order_edges(&edges, OptimizationMode::Minimize);
/// assert_eq!(sorted[0].weight(), 1.0);
/// ```
#[must_use]
pub fn order_edges<N: Clone>(edges: &[Edge<N>], mode: OptimizationMode) -> Vec<Edge<N>> {
    let mut sorted = edges.to_vec();
    sorted.sort_by(|left, right| mode.compare(left.weight(), right.weight()));
    sorted
}
