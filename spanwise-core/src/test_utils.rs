//! Shared test utilities for `spanwise-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanwise_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{Edge, Graph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `SPANWISE_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Edge list of the six-node A–F reference graph.
pub(crate) const SAMPLE_EDGES: &[(&str, &str, f64)] = &[
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

/// Converts `(u, v, weight)` tuples into edges.
pub(crate) fn edges_from(raw: &[(&'static str, &'static str, f64)]) -> Vec<Edge<&'static str>> {
    raw.iter().map(|&(u, v, weight)| Edge::new(u, v, weight)).collect()
}

/// The A–F reference graph.
pub(crate) fn sample_graph() -> Graph<&'static str> {
    Graph::from_edges(edges_from(SAMPLE_EDGES)).expect("sample graph is valid")
}
