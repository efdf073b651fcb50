//! Declared lattices that are not implemented yet.
//!
//! Each generator here validates nothing and always returns
//! [`TopologyError::Unsupported`], so a driver configured for one of
//! these geometries fails loudly instead of running on an empty graph.

use tessel_core::{EdgeBehavior, NodeId, TopologyError};
use tessel_graph::InteractionGraph;
use tracing::debug;

fn unsupported<NM, EM>(
    topology: &'static str,
) -> Result<InteractionGraph<NodeId, NM, EM>, TopologyError> {
    debug!(topology, "unsupported topology requested");
    Err(TopologyError::Unsupported { topology })
}

/// 2D square grid with 8-connected (Moore) neighbourhood. Unsupported.
pub fn rect2d_moore<NM, EM>(
    _rows: u32,
    _cols: u32,
    _edge: EdgeBehavior,
) -> Result<InteractionGraph<NodeId, NM, EM>, TopologyError> {
    unsupported("rect2d_moore")
}

/// 3D square lattice. Unsupported.
pub fn rect3d<NM, EM>(
    _len: u32,
    _edge: EdgeBehavior,
) -> Result<InteractionGraph<NodeId, NM, EM>, TopologyError> {
    unsupported("rect3d")
}

/// 3D hexagonal lattice. Unsupported.
pub fn hex3d<NM, EM>(
    _len: u32,
    _edge: EdgeBehavior,
) -> Result<InteractionGraph<NodeId, NM, EM>, TopologyError> {
    unsupported("hex3d")
}

#[cfg(test)]
mod tests {
    use super::*;

    type Graph = InteractionGraph<NodeId>;

    #[test]
    fn every_placeholder_fails() {
        let moore: Result<Graph, _> = rect2d_moore(3, 3, EdgeBehavior::Absorb);
        assert_eq!(
            moore.err(),
            Some(TopologyError::Unsupported { topology: "rect2d_moore" })
        );
        let r3: Result<Graph, _> = rect3d(8, EdgeBehavior::Wrap);
        assert_eq!(r3.err(), Some(TopologyError::Unsupported { topology: "rect3d" }));
        let h3: Result<Graph, _> = hex3d(8, EdgeBehavior::Absorb);
        assert_eq!(h3.err(), Some(TopologyError::Unsupported { topology: "hex3d" }));
    }
}
