//! Shared helpers for lattice generators.

use tessel_core::{EdgeBehavior, NodeId, TopologyError};

/// Largest node count a generator may produce: ids are `u32`.
pub(crate) const MAX_NODES: u64 = u32::MAX as u64;

/// Reject zero-length axes.
pub(crate) fn check_extent(len: u32) -> Result<u32, TopologyError> {
    if len == 0 {
        return Err(TopologyError::EmptyTopology);
    }
    Ok(len)
}

/// `rows * cols`, rejecting empty grids and grids too large for [`NodeId`].
pub(crate) fn checked_cell_count(rows: u32, cols: u32) -> Result<u32, TopologyError> {
    check_extent(rows)?;
    check_extent(cols)?;
    let count = rows as u64 * cols as u64;
    if count > MAX_NODES {
        return Err(TopologyError::DimensionTooLarge {
            name: "rows * cols",
            value: count,
            max: MAX_NODES,
        });
    }
    Ok(count as u32)
}

/// Resolve a single axis position under the given edge behavior.
///
/// Returns `Some(position)` in `[0, len)`, or `None` if the position is
/// out of range and the edge absorbs.
pub(crate) fn resolve_axis(val: i64, len: u32, edge: EdgeBehavior) -> Option<u32> {
    let n = len as i64;
    if (0..n).contains(&val) {
        return Some(val as u32);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Wrap => Some(val.rem_euclid(n) as u32),
    }
}

/// Row-major id of `(row, col)` in a grid with `cols` columns.
pub(crate) fn row_major(row: u32, col: u32, cols: u32) -> NodeId {
    NodeId(row * cols + col)
}
