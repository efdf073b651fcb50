//! Generator selection by value.

use crate::hex2d::Hex2D;
use crate::linear::Linear;
use crate::rect2d::Rect2D;
use crate::topology::{populate, Topology};
use tessel_core::{EdgeBehavior, NodeId, TopologyError};
use tessel_graph::InteractionGraph;
use tracing::debug;

/// Which lattice to generate, with its dimensions and boundary behavior.
///
/// Drivers that read their geometry from configuration hold a
/// `TopologySpec` and call [`build`](Self::build) once at startup.
///
/// # Examples
///
/// ```
/// use tessel_topology::{EdgeBehavior, NodeId, TopologySpec};
/// use tessel_graph::InteractionGraph;
///
/// let spec = TopologySpec::Hex2D { rows: 4, cols: 4, edge: EdgeBehavior::Wrap };
/// let g: InteractionGraph<NodeId> = spec.build().unwrap();
/// assert_eq!(g.node_count(), 16);
///
/// let odd = TopologySpec::Hex2D { rows: 3, cols: 4, edge: EdgeBehavior::Wrap };
/// assert!(odd.validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopologySpec {
    /// Chain or ring of `len` nodes.
    Linear {
        /// Number of nodes.
        len: u32,
        /// Boundary behavior.
        edge: EdgeBehavior,
    },
    /// 4-neighbour square grid.
    Rect2D {
        /// Number of rows.
        rows: u32,
        /// Number of columns.
        cols: u32,
        /// Boundary behavior.
        edge: EdgeBehavior,
    },
    /// Offset hexagonal grid.
    Hex2D {
        /// Number of rows (even when wrapping).
        rows: u32,
        /// Number of columns.
        cols: u32,
        /// Boundary behavior.
        edge: EdgeBehavior,
    },
    /// 8-neighbour square grid (unsupported).
    Moore2D {
        /// Number of rows.
        rows: u32,
        /// Number of columns.
        cols: u32,
        /// Boundary behavior.
        edge: EdgeBehavior,
    },
    /// 3D square lattice (unsupported).
    Rect3D {
        /// Number of nodes.
        len: u32,
        /// Boundary behavior.
        edge: EdgeBehavior,
    },
    /// 3D hexagonal lattice (unsupported).
    Hex3D {
        /// Number of nodes.
        len: u32,
        /// Boundary behavior.
        edge: EdgeBehavior,
    },
}

impl TopologySpec {
    /// Short lowercase name of the selected generator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "linear",
            Self::Rect2D { .. } => "rect2d",
            Self::Hex2D { .. } => "hex2d",
            Self::Moore2D { .. } => "rect2d_moore",
            Self::Rect3D { .. } => "rect3d",
            Self::Hex3D { .. } => "hex3d",
        }
    }

    /// Boundary behavior of the selected generator.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        match *self {
            Self::Linear { edge, .. }
            | Self::Rect2D { edge, .. }
            | Self::Hex2D { edge, .. }
            | Self::Moore2D { edge, .. }
            | Self::Rect3D { edge, .. }
            | Self::Hex3D { edge, .. } => edge,
        }
    }

    /// Check dimensions, parity, and support without building anything.
    pub fn validate(&self) -> Result<(), TopologyError> {
        self.topology().map(|_| ())
    }

    /// Generate the interaction graph.
    pub fn build<NM, EM>(&self) -> Result<InteractionGraph<NodeId, NM, EM>, TopologyError> {
        let topology = self.topology()?;
        Ok(populate(&*topology))
    }

    fn topology(&self) -> Result<Box<dyn Topology>, TopologyError> {
        let result = self.resolve();
        if let Err(err) = &result {
            debug!(spec = ?self, %err, "topology spec rejected");
        }
        result
    }

    fn resolve(&self) -> Result<Box<dyn Topology>, TopologyError> {
        let topology: Box<dyn Topology> = match *self {
            Self::Linear { len, edge } => Box::new(Linear::new(len, edge)?),
            Self::Rect2D { rows, cols, edge } => Box::new(Rect2D::new(rows, cols, edge)?),
            Self::Hex2D { rows, cols, edge } => Box::new(Hex2D::new(rows, cols, edge)?),
            Self::Moore2D { .. } | Self::Rect3D { .. } | Self::Hex3D { .. } => {
                return Err(TopologyError::Unsupported {
                    topology: self.name(),
                })
            }
        };
        Ok(topology)
    }
}
