//! Offset hex-grid geometry
//!
//! Cells in odd columns sit half a row lower than cells in even columns,
//! so the neighbor delta depends on column parity. Two const tables
//! (indexed by direction bit order) cover all six directions; the lookup
//! is pure arithmetic, no cross-call cache.

use crate::domain::direction::Direction;

/// (row, col) deltas for even columns, indexed by `Direction::index()`
const EVEN_COL_DELTAS: [(i32, i32); 6] = [
    (0, 1),   // E
    (1, 0),   // SE
    (1, -1),  // SW
    (0, -1),  // W
    (-1, -1), // NW
    (-1, 0),  // NE
];

/// (row, col) deltas for odd columns
const ODD_COL_DELTAS: [(i32, i32); 6] = [
    (0, 1),  // E
    (1, 1),  // SE
    (1, 0),  // SW
    (0, -1), // W
    (-1, 0), // NW
    (-1, 1), // NE
];

/// Coordinate of the neighboring cell in `dir`; may be out of bounds
#[inline]
pub fn neighbor(row: i32, col: i32, dir: Direction) -> (i32, i32) {
    let (dr, dc) = if col & 1 == 0 {
        EVEN_COL_DELTAS[dir.index()]
    } else {
        ODD_COL_DELTAS[dir.index()]
    };
    (row + dr, col + dc)
}
