//! Interaction graph for Tessel simulations.
//!
//! An [`InteractionGraph`] is the flattened, topology-independent view of
//! a simulated space: nodes are cells or agent slots, interactions are the
//! symmetric pairs that may influence each other. A simulation loop picks
//! interactions directly instead of picking a cell and then a neighbour.
//!
//! The graph knows nothing about geometry; the `tessel-topology` crate
//! populates it from lattice dimensions.
//!
//! # Invariants
//!
//! After every operation:
//!
//! - `b` is a neighbour of `a` exactly when `a` is a neighbour of `b`.
//! - Interaction metadata reads the same in both orientations.
//! - No metadata refers to a node or interaction that was removed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod graph;
pub mod key;

pub use graph::{InteractionGraph, Neighbors};
pub use key::InteractionKey;
pub use tessel_core::GraphError;
