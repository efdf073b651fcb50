//! 1D chain lattice, optionally closed into a ring.

use crate::lattice::{check_extent, resolve_axis};
use crate::topology::Topology;
use tessel_core::{EdgeBehavior, NodeId, TopologyError};
use tessel_graph::InteractionGraph;
use tracing::debug;

/// A one-dimensional lattice of `len` nodes.
///
/// Node `i` interacts with `i + 1`. With [`EdgeBehavior::Wrap`] node
/// `len - 1` also interacts with node `0`, closing a ring; a single node
/// cannot wrap onto itself and stays isolated.
///
/// ```text
/// Absorb:   0 <-> 1 <-> 2 <-> 3 <-> 4
/// Wrap:  -> 0 <-> 1 <-> 2 <-> 3 <-> 4 <-
/// ```
///
/// # Examples
///
/// ```
/// use tessel_topology::{EdgeBehavior, Linear, NodeId, Topology};
/// use tessel_graph::InteractionGraph;
///
/// let ring: InteractionGraph<NodeId> = Linear::new(5, EdgeBehavior::Wrap).unwrap().build();
/// assert_eq!(ring.interaction_count(), 5);
/// assert!(ring.contains_interaction(&NodeId(4), &NodeId(0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Linear {
    len: u32,
    edge: EdgeBehavior,
}

impl Linear {
    /// Create a lattice of `len` nodes.
    ///
    /// Returns `Err(TopologyError::EmptyTopology)` if `len == 0`.
    pub fn new(len: u32, edge: EdgeBehavior) -> Result<Self, TopologyError> {
        let len = check_extent(len)
            .inspect_err(|err| debug!(topology = "linear", len, %err, "parameters rejected"))?;
        Ok(Self { len, edge })
    }

    /// Number of nodes.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Always returns `false`: construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Topology for Linear {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn node_count(&self) -> usize {
        self.len as usize
    }

    fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    fn for_each_interaction(&self, emit: &mut dyn FnMut(NodeId, NodeId)) {
        for i in 0..self.len {
            if let Some(next) = resolve_axis(i as i64 + 1, self.len, self.edge) {
                if next != i {
                    emit(NodeId(i), NodeId(next));
                }
            }
        }
    }
}

/// Generate a chain of `len` nodes, or a ring if `edge` wraps.
pub fn linear<NM, EM>(
    len: u32,
    edge: EdgeBehavior,
) -> Result<InteractionGraph<NodeId, NM, EM>, TopologyError> {
    Ok(Linear::new(len, edge)?.build())
}
