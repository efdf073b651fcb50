//! Benchmark profiles and utilities for Tessel.
//!
//! Provides pre-built topology profiles shared by the benches:
//!
//! - [`reference_profiles`]: 100x100 lattices (10K nodes) of every generator
//! - [`stress_profile`]: 316x316 hex torus (~100K nodes)
//! - [`removal_order`]: deterministic node ids to delete from a profile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_core::{EdgeBehavior, NodeId};
use tessel_topology::TopologySpec;

/// The 10K-node reference lattices, labelled for benchmark ids.
pub fn reference_profiles() -> Vec<(&'static str, TopologySpec)> {
    vec![
        (
            "linear_10k",
            TopologySpec::Linear {
                len: 10_000,
                edge: EdgeBehavior::Wrap,
            },
        ),
        (
            "rect2d_100x100",
            TopologySpec::Rect2D {
                rows: 100,
                cols: 100,
                edge: EdgeBehavior::Wrap,
            },
        ),
        (
            "hex2d_100x100",
            TopologySpec::Hex2D {
                rows: 100,
                cols: 100,
                edge: EdgeBehavior::Wrap,
            },
        ),
    ]
}

/// A 316x316 hex torus (~100K nodes) for stress testing.
pub fn stress_profile() -> TopologySpec {
    TopologySpec::Hex2D {
        rows: 316,
        cols: 316,
        edge: EdgeBehavior::Wrap,
    }
}

/// Pick `n` distinct node ids out of `0..node_count`, deterministically
/// spread by `seed`.
pub fn removal_order(node_count: u32, n: u32, seed: u64) -> Vec<NodeId> {
    let n = n.min(node_count);
    let mut picked = Vec::with_capacity(n as usize);
    let mut taken = std::collections::HashSet::new();

    for i in 0..n {
        let mut id = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add((i as u64).wrapping_mul(1442695040888963407))
            % node_count as u64) as u32;

        // Linear probe past ids already chosen.
        while !taken.insert(id) {
            id = (id + 1) % node_count;
        }
        picked.push(NodeId(id));
    }

    picked
}
