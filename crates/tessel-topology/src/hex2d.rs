//! 2D hexagonal lattice in offset ("brick-wall") layout.

use crate::lattice::{checked_cell_count, resolve_axis, row_major};
use crate::topology::Topology;
use smallvec::SmallVec;
use tessel_core::{EdgeBehavior, NodeId, TopologyError};
use tessel_graph::InteractionGraph;
use tracing::debug;

/// A `rows x cols` hexagonal grid stored on a row-major index grid.
///
/// Odd rows sit half a cell to the right of even rows:
///
/// ```text
///  0   1   2   3
///    4   5   6   7
///  8   9  10  11
///   12  13  14  15
/// ```
///
/// Every node interacts with its right neighbour in the same row and
/// with its two diagonal neighbours in the row above. With
/// `offset = cols` on odd rows and `offset = cols + 1` on even rows,
/// the top-left neighbour of `id` is `id - offset` and the top-right is
/// `id - offset + 1`; a diagonal whose column falls outside the row is
/// omitted. Interior nodes end up with six neighbours (`5` above:
/// `1, 2, 4, 6, 9, 10`).
///
/// With [`EdgeBehavior::Wrap`] columns and rows are periodic: the last
/// column connects to the first (horizontally and along the diagonals),
/// and the top row's diagonals reach into the bottom row. Wrapping
/// requires an even row count so that the top row (even) sits against a
/// bottom row of opposite parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hex2D {
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
}

impl Hex2D {
    /// Create a hex grid with `rows * cols` nodes.
    ///
    /// Returns `Err(TopologyError::EmptyTopology)` if either dimension is
    /// 0, `Err(TopologyError::DimensionTooLarge)` if the node count does
    /// not fit a [`NodeId`], or `Err(TopologyError::OddRowsWithWrap)` if
    /// wrapping is requested with an odd row count.
    pub fn new(rows: u32, cols: u32, edge: EdgeBehavior) -> Result<Self, TopologyError> {
        Self::check(rows, cols, edge).inspect_err(|err| {
            let wrap = edge.is_wrap();
            debug!(topology = "hex2d", rows, cols, wrap, %err, "parameters rejected");
        })?;
        Ok(Self { rows, cols, edge })
    }

    fn check(rows: u32, cols: u32, edge: EdgeBehavior) -> Result<(), TopologyError> {
        checked_cell_count(rows, cols)?;
        if edge.is_wrap() && rows % 2 != 0 {
            return Err(TopologyError::OddRowsWithWrap { rows });
        }
        Ok(())
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

    /// Top-left and top-right neighbours of `id`, after edge handling.
    ///
    /// Both are `None` for ids outside the grid and, without wrapping,
    /// for nodes in row 0.
    pub fn upper_neighbours(&self, id: NodeId) -> [Option<NodeId>; 2] {
        if id.index() >= self.rows as usize * self.cols as usize {
            return [None, None];
        }
        let row = id.0 / self.cols;
        let col = id.0 % self.cols;
        self.diagonals_above(row, col)
    }

    fn diagonals_above(&self, row: u32, col: u32) -> [Option<NodeId>; 2] {
        let Some(above) = resolve_axis(row as i64 - 1, self.rows, self.edge) else {
            return [None, None];
        };
        // Odd rows are shifted right, so their top-right is one column further.
        let top_right_col = col as i64 + (row % 2) as i64;
        let at = |c: i64| {
            resolve_axis(c, self.cols, self.edge).map(|c| row_major(above, c, self.cols))
        };
        [at(top_right_col - 1), at(top_right_col)]
    }

    /// The right, top-left and top-right partners of `(row, col)`.
    fn forward_neighbours(&self, row: u32, col: u32) -> SmallVec<[NodeId; 3]> {
        let here = row_major(row, col, self.cols);
        let mut out = SmallVec::new();
        if let Some(c) = resolve_axis(col as i64 + 1, self.cols, self.edge) {
            out.push(row_major(row, c, self.cols));
        }
        out.extend(self.diagonals_above(row, col).into_iter().flatten());
        out.retain(|nb| *nb != here);
        out
    }
}

impl Topology for Hex2D {
    fn name(&self) -> &'static str {
        "hex2d"
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

/// Generate an offset hexagonal grid, or a hex torus if `edge` wraps.
///
/// Fails with [`TopologyError::OddRowsWithWrap`] before allocating
/// anything if wrapping is requested with odd `rows`.
pub fn hex2d<NM, EM>(
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
) -> Result<InteractionGraph<NodeId, NM, EM>, TopologyError> {
    Ok(Hex2D::new(rows, cols, edge)?.build())
}
