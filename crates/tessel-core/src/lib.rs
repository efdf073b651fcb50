//! Core types for the Tessel interaction topology crates.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers, boundary flag, and error types shared by the
//! interaction graph and the topology generators.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod id;

pub use edge::EdgeBehavior;
pub use error::{GraphError, TopologyError};
pub use id::NodeId;
