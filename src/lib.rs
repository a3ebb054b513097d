//! HexGas Engine - FHP-style hexagonal lattice-gas automaton in WASM
//!
//! Architecture:
//! - core/          - Cross-cutting support (errors)
//! - domain/        - Directions and collision rules
//! - spatial/       - Grid storage and hex-lattice geometry
//! - simulation/    - Orchestration and public API
//!
//! The engine owns the grid and the update rule; the JS frontend owns
//! rendering, input and pixel-to-cell picking, and talks to the engine
//! only through the `World` facade and the linear-memory views.

pub mod core;
pub mod domain;
pub mod spatial;
pub mod simulation;

// Convenience re-exports for library consumers
pub use crate::core::error::{EngineError, RuleError};
pub use domain::direction::{Direction, DIR_ALL, DIR_E, DIR_NE, DIR_NW, DIR_SE, DIR_SW, DIR_W};
pub use domain::rules::CollisionTable;
pub use simulation::{LatticeCore, World};
pub use spatial::grid::HexGrid;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 HexGas WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Export direction bit constants for JS
#[wasm_bindgen]
pub fn dir_e() -> u8 { DIR_E }
#[wasm_bindgen]
pub fn dir_se() -> u8 { DIR_SE }
#[wasm_bindgen]
pub fn dir_sw() -> u8 { DIR_SW }
#[wasm_bindgen]
pub fn dir_w() -> u8 { DIR_W }
#[wasm_bindgen]
pub fn dir_nw() -> u8 { DIR_NW }
#[wasm_bindgen]
pub fn dir_ne() -> u8 { DIR_NE }

/// Unit-vector X component for a direction bit index 0..5 (for drawing headings)
#[wasm_bindgen]
pub fn direction_unit_x(index: u8) -> f32 {
    Direction::from_index(index).map_or(0.0, |d| d.unit_vector().0)
}

/// Unit-vector Y component for a direction bit index 0..5
#[wasm_bindgen]
pub fn direction_unit_y(index: u8) -> f32 {
    Direction::from_index(index).map_or(0.0, |d| d.unit_vector().1)
}
