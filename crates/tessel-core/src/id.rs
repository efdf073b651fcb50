//! Strongly-typed node identifier.

use std::fmt;

/// Identifies a node produced by a topology generator.
///
/// Generators assign ids in sequence order (1D) or row-major order (2D):
/// `NodeId(r * cols + c)` is the cell at row `r`, column `c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The id as a `usize`, for index arithmetic.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
