//! Lattice generators for Tessel interaction graphs.
//!
//! A generator owns the index arithmetic for one geometry and returns a
//! populated [`InteractionGraph`](tessel_graph::InteractionGraph). After
//! that the caller only uses graph operations; no coordinates survive.
//!
//! # Generators
//!
//! - [`Linear`] / [`linear`]: chain, or ring with [`EdgeBehavior::Wrap`]
//! - [`Rect2D`] / [`rect2d_von_neumann`]: 4-neighbour grid, or torus
//! - [`Hex2D`] / [`hex2d`]: offset hexagonal grid, or hex torus (even rows)
//! - [`rect2d_moore`], [`rect3d`], [`hex3d`]: declared, unsupported
//!
//! Node ids are assigned in sequence (1D) or row-major (2D) order.
//!
//! # Configuration
//!
//! [`TopologySpec`] selects a generator by value, for drivers that read
//! the geometry from their own configuration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod hex2d;
pub(crate) mod lattice;
pub mod linear;
pub mod rect2d;
pub mod topology;
pub mod unsupported;

pub use config::TopologySpec;
pub use hex2d::{hex2d, Hex2D};
pub use linear::{linear, Linear};
pub use rect2d::{rect2d_von_neumann, Rect2D};
pub use tessel_core::{EdgeBehavior, NodeId, TopologyError};
pub use topology::{populate, Topology};
pub use unsupported::{hex3d, rect2d_moore, rect3d};
