//! The per-tick transition: inject -> collide -> propagate/reflect
//!
//! Every cell's next state is computed from a frozen snapshot of the
//! current grid into disjoint output storage. Updating a single buffer
//! in place would make the result depend on visitation order (a particle
//! written this tick could be re-read at a not-yet-visited cell), which
//! breaks synchronous-automaton semantics.

use crate::domain::direction::{DirMask, ALL_DIRECTIONS, SOURCE_EMISSION};
use crate::spatial::hex::neighbor;

use super::LatticeCore;

pub(super) fn step(core: &mut LatticeCore) {
    inject_and_collide(core);
    propagate(core);
    std::mem::swap(&mut core.grid.occupancy, &mut core.next);
    core.frame += 1;
}

/// Phases 1+2: source emission ORed in, then the table lookup, per cell.
///
/// Obstacle cells are forced to 0: they hold no traveling particles, and
/// an obstacle that is also flagged as a source emits nothing (the
/// obstacle flag wins).
fn inject_and_collide(core: &mut LatticeCore) {
    for idx in 0..core.grid.size() {
        if core.grid.obstacles[idx] != 0 {
            core.collided[idx] = 0;
            continue;
        }
        let mut state = core.grid.occupancy[idx];
        if core.grid.sources[idx] != 0 {
            state |= SOURCE_EMISSION;
        }
        core.collided[idx] = core.table.collide(state);
    }
}

/// Phase 3: move every post-collision bit to its parity-offset neighbor,
/// or bounce it back as the opposite bit when the neighbor is out of
/// bounds or an obstacle. Destination writes merge with OR, which is
/// commutative, so visitation order does not matter.
#[cfg(not(feature = "parallel"))]
fn propagate(core: &mut LatticeCore) {
    core.next.fill(0);
    let grid = &core.grid;
    let collided = &core.collided;
    let next = &mut core.next;
    for row in 0..grid.rows() {
        scatter_row_into(grid, collided, row, next);
    }
}

/// Parallel propagation: rows are partitioned across threads into
/// per-thread buffers that a final reduce OR-merges. OR is commutative
/// and associative, so the merge order is irrelevant and the result is
/// identical to the serial pass.
#[cfg(feature = "parallel")]
fn propagate(core: &mut LatticeCore) {
    use rayon::prelude::*;

    let grid = &core.grid;
    let collided = &core.collided;
    let size = grid.size();

    let merged = (0..grid.rows())
        .into_par_iter()
        .fold(
            || vec![0 as DirMask; size],
            |mut buf, row| {
                scatter_row_into(grid, collided, row, &mut buf);
                buf
            },
        )
        .reduce(
            || vec![0 as DirMask; size],
            |mut a, b| {
                for (dst, src) in a.iter_mut().zip(b.iter()) {
                    *dst |= *src;
                }
                a
            },
        );

    core.next = merged;
}

/// Scatter one row of post-collision states into `out`
fn scatter_row_into(
    grid: &crate::spatial::grid::HexGrid,
    collided: &[DirMask],
    row: u32,
    out: &mut [DirMask],
) {
    let cols = grid.cols();
    for col in 0..cols {
        let idx = grid.index(row, col);
        let state = collided[idx];
        if state == 0 {
            continue;
        }
        for dir in ALL_DIRECTIONS {
            if state & dir.bit() == 0 {
                continue;
            }
            let (nr, nc) = neighbor(row as i32, col as i32, dir);
            if grid.in_bounds(nr, nc) && !grid.is_obstacle_idx(grid.index(nr as u32, nc as u32)) {
                out[grid.index(nr as u32, nc as u32)] |= dir.bit();
            } else {
                // Bounce-back: the particle reverses heading in place
                out[idx] |= dir.opposite().bit();
            }
        }
    }
}
