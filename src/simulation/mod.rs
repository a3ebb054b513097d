//! LatticeCore - the lattice-gas simulation session
//!
//! Single Responsibility: this type only orchestrates and owns state;
//! the tick itself lives in step/, grid edits in commands/, and the WASM
//! boundary in facade.rs. The grid is exclusively owned by the session;
//! edits and steps never run concurrently (tick-boundary discipline is
//! the caller's).

use crate::core::error::EngineError;
use crate::domain::direction::DirMask;
use crate::domain::rules::CollisionTable;
use crate::spatial::grid::HexGrid;

#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
mod facade;

pub use facade::World;

/// The simulation core: grid, collision table, double buffer
pub struct LatticeCore {
    grid: HexGrid,
    table: CollisionTable,

    // Scratch buffers reused every tick (double buffering: the tick reads
    // a frozen snapshot and writes disjoint storage, then the occupancy
    // buffer is swapped in)
    collided: Vec<DirMask>,
    next: Vec<DirMask>,

    frame: u64,
}

impl LatticeCore {
    /// Create a session with the built-in FHP rule set
    pub fn new(rows: u32, cols: u32) -> Self {
        Self::with_table(rows, cols, CollisionTable::fhp())
    }

    /// Create a session with a caller-validated collision table
    pub fn with_table(rows: u32, cols: u32, table: CollisionTable) -> Self {
        let grid = HexGrid::new(rows, cols);
        let size = grid.size();
        Self {
            grid,
            table,
            collided: vec![0; size],
            next: vec![0; size],
            frame: 0,
        }
    }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.grid.rows(), self.grid.cols())
    }

    pub fn frame(&self) -> u64 { self.frame }

    /// Total set bits on the grid (HUD/debug query)
    pub fn particle_count(&self) -> u32 {
        self.grid.particle_count()
    }

    /// Read-only view of the grid for renderers and tests
    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    // === Queries ===

    pub fn occupancy(&self, row: i32, col: i32) -> Result<DirMask, EngineError> {
        self.grid.occupancy_at(row, col)
    }

    pub fn is_obstacle(&self, row: i32, col: i32) -> Result<bool, EngineError> {
        self.grid.is_obstacle(row, col)
    }

    pub fn is_source(&self, row: i32, col: i32) -> Result<bool, EngineError> {
        self.grid.is_source(row, col)
    }

    // === Edits (between ticks) ===

    /// Seed or overwrite a cell's occupancy mask
    pub fn set_occupancy(&mut self, row: i32, col: i32, mask: DirMask) -> Result<(), EngineError> {
        commands::set_occupancy(self, row, col, mask)
    }

    /// Flip the obstacle flag; returns the new value
    pub fn toggle_obstacle(&mut self, row: i32, col: i32) -> Result<bool, EngineError> {
        commands::toggle_obstacle(self, row, col)
    }

    /// Flip the source flag; returns the new value
    pub fn toggle_source(&mut self, row: i32, col: i32) -> Result<bool, EngineError> {
        commands::toggle_source(self, row, col)
    }

    /// Reset every cell to empty, no obstacle, no source
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Swap in a new collision rule set from a JSON bundle.
    /// A rejected bundle leaves the current table untouched.
    pub fn load_collision_rules_json(&mut self, json: &str) -> Result<(), EngineError> {
        let table = CollisionTable::from_bundle_json(json)?;
        self.table = table;
        Ok(())
    }

    // === Tick ===

    /// Advance the automaton one tick: inject -> collide -> propagate/reflect
    pub fn step(&mut self) {
        step::step(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
