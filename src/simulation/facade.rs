//! WASM boundary - the only surface the JS frontend calls
//!
//! Coordinate-taking operations surface `InvalidCoordinate` as a JS
//! error; the frontend owns pixel-to-cell picking and bitmask-to-glyph
//! drawing, reading cell data through the linear-memory views.

use wasm_bindgen::prelude::*;

use super::LatticeCore;

fn to_js(err: crate::core::error::EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: LatticeCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new session with given dimensions and the built-in FHP rules
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            core: LatticeCore::new(rows, cols),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    /// Advance the automaton one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Reset every cell to empty, no obstacle, no source
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Occupancy bitmask at (row, col)
    pub fn occupancy(&self, row: i32, col: i32) -> Result<u8, JsValue> {
        self.core.occupancy(row, col).map_err(to_js)
    }

    pub fn is_obstacle(&self, row: i32, col: i32) -> Result<bool, JsValue> {
        self.core.is_obstacle(row, col).map_err(to_js)
    }

    pub fn is_source(&self, row: i32, col: i32) -> Result<bool, JsValue> {
        self.core.is_source(row, col).map_err(to_js)
    }

    /// Seed or overwrite a cell's occupancy mask (low 6 bits)
    pub fn set_occupancy(&mut self, row: i32, col: i32, mask: u8) -> Result<(), JsValue> {
        self.core.set_occupancy(row, col, mask).map_err(to_js)
    }

    /// Flip the obstacle flag; returns the new value
    pub fn toggle_obstacle(&mut self, row: i32, col: i32) -> Result<bool, JsValue> {
        self.core.toggle_obstacle(row, col).map_err(to_js)
    }

    /// Flip the source flag; returns the new value
    pub fn toggle_source(&mut self, row: i32, col: i32) -> Result<bool, JsValue> {
        self.core.toggle_source(row, col).map_err(to_js)
    }

    /// Swap in a collision rule bundle (JSON); rejected bundles change nothing
    pub fn load_collision_rules(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_collision_rules_json(&json).map_err(to_js)
    }

    // === Linear-memory views for JS rendering ===

    /// Pointer to the occupancy array (one 6-bit mask byte per cell)
    pub fn occupancy_ptr(&self) -> *const u8 {
        self.core.grid().occupancy_ptr()
    }

    /// Pointer to the obstacle flags (0/1 byte per cell)
    pub fn obstacles_ptr(&self) -> *const u8 {
        self.core.grid().obstacles_ptr()
    }

    /// Pointer to the source flags (0/1 byte per cell)
    pub fn sources_ptr(&self) -> *const u8 {
        self.core.grid().sources_ptr()
    }

    /// Length in cells of each linear view (rows * cols)
    pub fn cells_len(&self) -> usize {
        self.core.grid().size()
    }
}
