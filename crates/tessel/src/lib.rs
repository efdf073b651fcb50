//! Tessel: interaction graphs and lattice topologies for agent-based simulation.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessel sub-crates. A simulation driver builds its world once with a
//! generator, then mutates the resulting graph as agents die, migrate, or
//! form new ties.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // A 4x4 hexagonal torus with per-interaction weights.
//! let mut world: InteractionGraph<NodeId, (), f32> =
//!     hex2d(4, 4, EdgeBehavior::Wrap).unwrap();
//! assert_eq!(world.degree(&NodeId(0)), 6);
//!
//! // Flatten once per step to drive pairwise updates.
//! let pairs: Vec<(NodeId, NodeId)> = world.interactions().map(|(a, b)| (*a, *b)).collect();
//! assert_eq!(pairs.len(), 48);
//!
//! // Agent 5 dies.
//! world.remove_node(&NodeId(5)).unwrap();
//! assert_eq!(world.interaction_count(), 42);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | `NodeId`, `EdgeBehavior`, error types |
//! | [`graph`] | `tessel-graph` | `InteractionGraph` and its iterators |
//! | [`topology`] | `tessel-topology` | Lattice generators and `TopologySpec` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core ids, boundary behavior, and errors (`tessel-core`).
pub use tessel_core as types;

/// The mutable interaction graph (`tessel-graph`).
///
/// [`graph::InteractionGraph`] is generic over node id and both metadata
/// types; generators fix the id to [`types::NodeId`].
pub use tessel_graph as graph;

/// Lattice generators (`tessel-topology`).
///
/// Free functions such as [`topology::hex2d`] build a graph directly;
/// [`topology::TopologySpec`] selects one by value.
pub use tessel_topology as topology;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessel_core::{EdgeBehavior, GraphError, NodeId, TopologyError};

    // Graph
    pub use tessel_graph::InteractionGraph;

    // Generators
    pub use tessel_topology::{
        hex2d, hex3d, linear, rect2d_moore, rect2d_von_neumann, rect3d, Topology, TopologySpec,
    };
}
