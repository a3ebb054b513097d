//! Grid edit commands, applied between ticks

use crate::core::error::EngineError;
use crate::domain::direction::DirMask;

use super::LatticeCore;

pub(super) fn set_occupancy(
    core: &mut LatticeCore,
    row: i32,
    col: i32,
    mask: DirMask,
) -> Result<(), EngineError> {
    // Obstacle cells hold no particles; writing into one would break the
    // "obstacle occupancy is always 0" invariant, so keep them empty.
    if core.grid.is_obstacle(row, col)? {
        return Ok(());
    }
    core.grid.set_occupancy_at(row, col, mask)
}

pub(super) fn toggle_obstacle(
    core: &mut LatticeCore,
    row: i32,
    col: i32,
) -> Result<bool, EngineError> {
    let idx = core.grid.checked_index(row, col)?;
    let now_obstacle = core.grid.obstacles[idx] == 0;
    core.grid.obstacles[idx] = now_obstacle as u8;
    if now_obstacle {
        // Particles sitting here are swallowed by the new wall
        core.grid.occupancy[idx] = 0;
    }
    Ok(now_obstacle)
}

pub(super) fn toggle_source(
    core: &mut LatticeCore,
    row: i32,
    col: i32,
) -> Result<bool, EngineError> {
    let idx = core.grid.checked_index(row, col)?;
    let now_source = core.grid.sources[idx] == 0;
    core.grid.sources[idx] = now_source as u8;
    Ok(now_source)
}

pub(super) fn clear(core: &mut LatticeCore) {
    core.grid.clear();
    core.collided.fill(0);
    core.next.fill(0);
    core.frame = 0;
}
