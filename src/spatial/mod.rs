//! Grid storage and hex-lattice geometry

pub mod grid;
pub mod hex;
