//! Error types for the Tessel crates.
//!
//! Organized by subsystem: [`GraphError`] for interaction graph
//! mutations and [`TopologyError`] for generator parameters. Both are
//! contract violations surfaced before any state is changed; none of
//! them is transient, so callers fix the call rather than retry it.

use std::error::Error;
use std::fmt;

/// Errors from interaction graph mutations.
///
/// Generic over the node identifier so that callers using their own id
/// type get it back in the error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError<N> {
    /// A node with this identifier already exists.
    DuplicateNode {
        /// The offending identifier.
        node: N,
    },
    /// The operation requires a node that does not exist.
    UnknownNode {
        /// The missing identifier.
        node: N,
    },
    /// The interaction to remove is not present.
    NoSuchInteraction {
        /// First endpoint as passed by the caller.
        a: N,
        /// Second endpoint as passed by the caller.
        b: N,
    },
}

impl<N: fmt::Display> fmt::Display for GraphError<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode { node } => write!(f, "node {node} already exists"),
            Self::UnknownNode { node } => write!(f, "node {node} does not exist"),
            Self::NoSuchInteraction { a, b } => {
                write!(f, "no interaction between {a} and {b}")
            }
        }
    }
}

impl<N: fmt::Debug + fmt::Display> Error for GraphError<N> {}

/// Errors from topology generator construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// A dimension of zero was requested.
    EmptyTopology,
    /// The requested lattice has more nodes than [`NodeId`](crate::NodeId) can address.
    DimensionTooLarge {
        /// Name of the dimension that overflowed.
        name: &'static str,
        /// The requested value.
        value: u64,
        /// Maximum accepted value.
        max: u64,
    },
    /// Hexagonal wrapping needs an even row count so that the top and
    /// bottom rows have opposite offset parity.
    OddRowsWithWrap {
        /// The requested (odd) row count.
        rows: u32,
    },
    /// The generator is declared but not implemented.
    Unsupported {
        /// Name of the requested topology.
        topology: &'static str,
    },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTopology => write!(f, "topology must have at least one node"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::OddRowsWithWrap { rows } => write!(
                f,
                "cannot wrap hexagonal boundary with odd number of rows: {rows}"
            ),
            Self::Unsupported { topology } => {
                write!(f, "topology '{topology}' is not implemented")
            }
        }
    }
}

impl Error for TopologyError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeId;

    #[test]
    fn graph_error_messages_name_the_nodes() {
        let dup = GraphError::DuplicateNode { node: NodeId(3) };
        assert_eq!(dup.to_string(), "node 3 already exists");

        let unknown = GraphError::UnknownNode { node: "cell-a" };
        assert_eq!(unknown.to_string(), "node cell-a does not exist");

        let missing = GraphError::NoSuchInteraction {
            a: NodeId(1),
            b: NodeId(2),
        };
        assert_eq!(missing.to_string(), "no interaction between 1 and 2");
    }

    #[test]
    fn topology_error_messages() {
        assert_eq!(
            TopologyError::OddRowsWithWrap { rows: 5 }.to_string(),
            "cannot wrap hexagonal boundary with odd number of rows: 5"
        );
        assert_eq!(
            TopologyError::Unsupported { topology: "moore2d" }.to_string(),
            "topology 'moore2d' is not implemented"
        );
        let too_large = TopologyError::DimensionTooLarge {
            name: "rows * cols",
            value: 1 << 40,
            max: u32::MAX as u64,
        };
        assert!(too_large.to_string().starts_with("rows * cols = "));
    }

    #[test]
    fn errors_are_std_errors() {
        fn takes_error(_: &dyn Error) {}
        takes_error(&TopologyError::EmptyTopology);
        takes_error(&GraphError::UnknownNode { node: NodeId(0) });
    }
}
