//! 2D square grid with 4-connected (von Neumann) neighbourhood.

use crate::lattice::{checked_cell_count, resolve_axis, row_major};
use crate::topology::Topology;
use smallvec::SmallVec;
use tessel_core::{EdgeBehavior, NodeId, TopologyError};
use tessel_graph::InteractionGraph;
use tracing::debug;

/// A `rows x cols` square grid, ids assigned row-major.
///
/// ```text
///  0  1  2  3
///  4  5  6  7
///  8  9 10 11
/// ```
///
/// Each node interacts with the node to its right and the node below
/// it; left and up follow by symmetry, so interior nodes have four
/// neighbours (`5` above: `1, 4, 6, 9`). With [`EdgeBehavior::Wrap`] the
/// rightmost column connects to the leftmost and the bottom row to the
/// top, forming a torus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect2D {
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
}

impl Rect2D {
    /// Create a grid with `rows * cols` nodes.
    ///
    /// Returns `Err(TopologyError::EmptyTopology)` if either dimension
    /// is 0, or `Err(TopologyError::DimensionTooLarge)` if the node count
    /// does not fit a [`NodeId`].
    pub fn new(rows: u32, cols: u32, edge: EdgeBehavior) -> Result<Self, TopologyError> {
        checked_cell_count(rows, cols).inspect_err(|err| {
            debug!(topology = "rect2d", rows, cols, %err, "parameters rejected");
        })?;
        Ok(Self { rows, cols, edge })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Id of the node at `(row, col)`, or `None` outside the grid.
    pub fn node_at(&self, row: u32, col: u32) -> Option<NodeId> {
        (row < self.rows && col < self.cols).then(|| row_major(row, col, self.cols))
    }

    /// The right and lower partners of `(row, col)`, after edge handling.
    fn forward_neighbours(&self, row: u32, col: u32) -> SmallVec<[NodeId; 2]> {
        let mut out = SmallVec::new();
        let here = row_major(row, col, self.cols);
        if let Some(c) = resolve_axis(col as i64 + 1, self.cols, self.edge) {
            out.push(row_major(row, c, self.cols));
        }
        if let Some(r) = resolve_axis(row as i64 + 1, self.rows, self.edge) {
            out.push(row_major(r, col, self.cols));
        }
        out.retain(|nb| *nb != here);
        out
    }
}

impl Topology for Rect2D {
    fn name(&self) -> &'static str {
        "rect2d"
    }

    fn node_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    fn for_each_interaction(&self, emit: &mut dyn FnMut(NodeId, NodeId)) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let here = row_major(row, col, self.cols);
                for nb in self.forward_neighbours(row, col) {
                    emit(here, nb);
                }
            }
        }
    }
}

/// Generate a 4-neighbour grid, or a torus if `edge` wraps.
pub fn rect2d_von_neumann<NM, EM>(
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
) -> Result<InteractionGraph<NodeId, NM, EM>, TopologyError> {
    Ok(Rect2D::new(rows, cols, edge)?.build())
}
