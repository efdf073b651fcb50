//! Test utilities for Tessel development.
//!
//! Provides invariant checks shared by the graph and topology test
//! suites, adjacency fixtures for the documented concrete scenarios,
//! and [`init_test_logging`] for tracing output under `cargo test`.
//!
//! All checks panic with a descriptive message on violation, so they
//! can be used directly in `#[test]` functions and inside `proptest!`.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::hash::Hash;

use tessel_graph::InteractionGraph;
use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber that writes through the test harness.
///
/// Honors `RUST_LOG`; defaults to `warn`. Safe to call from every test:
/// only the first call installs anything.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(false)
        .try_init();
}

/// Snapshot of a graph's adjacency as sorted collections, for equality
/// assertions that ignore iteration order.
pub fn adjacency_of<N, NM, EM>(graph: &InteractionGraph<N, NM, EM>) -> BTreeMap<N, BTreeSet<N>>
where
    N: Clone + Eq + Hash + Ord,
{
    graph
        .nodes()
        .map(|n| (n.clone(), graph.neighbors(n).cloned().collect()))
        .collect()
}

/// Assert `b in N(a)` iff `a in N(b)` for every node.
pub fn assert_symmetric<N, NM, EM>(graph: &InteractionGraph<N, NM, EM>)
where
    N: Clone + Eq + Hash + Ord + Debug,
{
    for a in graph.nodes() {
        for b in graph.neighbors(a) {
            assert!(
                graph.contains_node(b),
                "neighbour {b:?} of {a:?} is not a node"
            );
            assert!(
                graph.contains_interaction(b, a),
                "symmetry violated: {b:?} in N({a:?}) but {a:?} not in N({b:?})"
            );
        }
    }
}

/// Assert no node lists itself as a neighbour.
pub fn assert_no_self_loops<N, NM, EM>(graph: &InteractionGraph<N, NM, EM>)
where
    N: Clone + Eq + Hash + Ord + Debug,
{
    for a in graph.nodes() {
        assert!(!graph.contains_interaction(a, a), "self-loop on {a:?}");
    }
}

/// Assert interaction metadata reads identically in both orientations
/// for every stored entry.
pub fn assert_metadata_mirrored<N, NM, EM>(graph: &InteractionGraph<N, NM, EM>)
where
    N: Clone + Eq + Hash + Ord + Debug,
    EM: PartialEq + Debug,
{
    for key in graph.metadata_keys() {
        let (a, b) = (key.lo(), key.hi());
        let ab = graph.interaction_metadata(a, b);
        let ba = graph.interaction_metadata(b, a);
        assert!(ab.is_some(), "metadata key {key:?} not readable");
        assert_eq!(ab, ba, "metadata differs between ({a:?}, {b:?}) and ({b:?}, {a:?})");
    }
}

/// Assert `node` is gone: not a node, in nobody's neighbour set, and
/// named by no metadata entry.
pub fn assert_node_absent<N, NM, EM>(graph: &InteractionGraph<N, NM, EM>, node: &N)
where
    N: Clone + Eq + Hash + Ord + Debug,
{
    assert!(!graph.contains_node(node), "{node:?} still a node");
    assert!(graph.node_metadata(node).is_none(), "{node:?} still has metadata");
    for other in graph.nodes() {
        assert!(
            !graph.contains_interaction(other, node),
            "{node:?} still a neighbour of {other:?}"
        );
    }
    for key in graph.metadata_keys() {
        assert!(!key.touches(node), "orphan metadata {key:?} names {node:?}");
    }
}

/// Assert the graph holds exactly `expected` interactions, cross-checking
/// the stored count, the flattened listing, and the degree sum.
pub fn assert_interaction_count<N, NM, EM>(graph: &InteractionGraph<N, NM, EM>, expected: usize)
where
    N: Clone + Eq + Hash + Ord + Debug,
{
    assert_eq!(graph.interaction_count(), expected, "stored interaction count");
    assert_eq!(graph.interactions().count(), expected, "flattened interactions");
    let loops = graph.nodes().filter(|n| graph.contains_interaction(n, n)).count();
    let degree_sum: usize = graph.nodes().map(|n| graph.degree(n)).sum();
    assert_eq!(
        degree_sum + loops,
        2 * expected,
        "degree sum inconsistent with {expected} interactions"
    );
}

/// Run every structural check that holds for all graphs.
pub fn assert_graph_invariants<N, NM, EM>(graph: &InteractionGraph<N, NM, EM>)
where
    N: Clone + Eq + Hash + Ord + Debug,
    EM: PartialEq + Debug,
{
    assert_symmetric(graph);
    assert_metadata_mirrored(graph);
    assert_interaction_count(graph, graph.interaction_count());
}
