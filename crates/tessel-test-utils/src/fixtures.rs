//! Expected adjacencies for the documented concrete scenarios.

use std::collections::{BTreeMap, BTreeSet};

use tessel_core::NodeId;

/// Build an adjacency map from `(node, neighbours)` rows of raw ids.
pub fn adjacency(rows: &[(u32, &[u32])]) -> BTreeMap<NodeId, BTreeSet<NodeId>> {
    rows.iter()
        .map(|(node, nbrs)| (NodeId(*node), nbrs.iter().copied().map(NodeId).collect()))
        .collect()
}

/// `linear(5, Wrap)`: a 5-ring.
pub fn linear_ring_5() -> BTreeMap<NodeId, BTreeSet<NodeId>> {
    adjacency(&[
        (0, &[1, 4]),
        (1, &[0, 2]),
        (2, &[1, 3]),
        (3, &[2, 4]),
        (4, &[3, 0]),
    ])
}

/// `rect2d_von_neumann(2, 2, Absorb)`.
pub fn grid_2x2() -> BTreeMap<NodeId, BTreeSet<NodeId>> {
    adjacency(&[(0, &[1, 2]), (1, &[0, 3]), (2, &[0, 3]), (3, &[1, 2])])
}

/// `hex2d(2, 3, Wrap)`: the smallest wrapped hex grid with three columns.
///
/// ```text
///  0   1   2
///    3   4   5
/// ```
pub fn hex_2x3_wrapped() -> BTreeMap<NodeId, BTreeSet<NodeId>> {
    adjacency(&[
        (0, &[1, 2, 3, 5]),
        (1, &[0, 2, 3, 4]),
        (2, &[0, 1, 4, 5]),
        (3, &[0, 1, 4, 5]),
        (4, &[1, 2, 3, 5]),
        (5, &[0, 2, 3, 4]),
    ])
}
