//! HexGrid - Structure of Arrays (SoA) for cache-friendly cell storage
//!
//! Instead of: Vec<Cell>           // struct-per-cell, poor cache use
//! We have:    occupancy[], obstacles[], sources[]  // linear memory
//!
//! Flags are stored as 0/1 bytes so the JS renderer can view all three
//! arrays directly as linear memory.

use crate::core::error::EngineError;
use crate::domain::direction::{DirMask, DIR_ALL};

/// SoA grid of hex cells, dimensions fixed at construction
#[derive(Clone)]
pub struct HexGrid {
    rows: u32,
    cols: u32,
    size: usize,

    // Structure of Arrays - each property in its own contiguous array
    pub occupancy: Vec<DirMask>, // 6-bit direction masks (0..=63)
    pub obstacles: Vec<u8>,      // 1 = obstacle
    pub sources: Vec<u8>,        // 1 = source
}

impl HexGrid {
    pub fn new(rows: u32, cols: u32) -> Self {
        let size = (rows as usize) * (cols as usize);

        Self {
            rows,
            cols,
            size,
            occupancy: vec![0; size],
            obstacles: vec![0; size],
            sources: vec![0; size],
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        (row * self.cols + col) as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let row = (idx as u32) / self.cols;
        let col = (idx as u32) % self.cols;
        (row, col)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows as i32 && col >= 0 && col < self.cols as i32
    }

    /// Index for a signed coordinate, or `InvalidCoordinate`
    #[inline]
    pub fn checked_index(&self, row: i32, col: i32) -> Result<usize, EngineError> {
        if self.in_bounds(row, col) {
            Ok(self.index(row as u32, col as u32))
        } else {
            Err(EngineError::InvalidCoordinate {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    // === Occupancy access ===
    #[inline]
    pub fn occupancy_at(&self, row: i32, col: i32) -> Result<DirMask, EngineError> {
        Ok(self.occupancy[self.checked_index(row, col)?])
    }

    /// Write an occupancy mask (truncated to the 6 direction bits)
    #[inline]
    pub fn set_occupancy_at(&mut self, row: i32, col: i32, mask: DirMask) -> Result<(), EngineError> {
        let idx = self.checked_index(row, col)?;
        self.occupancy[idx] = mask & DIR_ALL;
        Ok(())
    }

    // === Flag access ===
    #[inline]
    pub fn is_obstacle(&self, row: i32, col: i32) -> Result<bool, EngineError> {
        Ok(self.obstacles[self.checked_index(row, col)?] != 0)
    }

    #[inline]
    pub fn is_obstacle_idx(&self, idx: usize) -> bool {
        self.obstacles[idx] != 0
    }

    #[inline]
    pub fn is_source(&self, row: i32, col: i32) -> Result<bool, EngineError> {
        Ok(self.sources[self.checked_index(row, col)?] != 0)
    }

    // === Clear entire grid ===
    pub fn clear(&mut self) {
        self.occupancy.fill(0);
        self.obstacles.fill(0);
        self.sources.fill(0);
    }

    /// Total number of particles (set bits) on the grid
    pub fn particle_count(&self) -> u32 {
        self.occupancy.iter().map(|s| s.count_ones()).sum()
    }

    // === Get raw pointers for JS rendering ===
    pub fn occupancy_ptr(&self) -> *const DirMask {
        self.occupancy.as_ptr()
    }

    pub fn obstacles_ptr(&self) -> *const u8 {
        self.obstacles.as_ptr()
    }

    pub fn sources_ptr(&self) -> *const u8 {
        self.sources.as_ptr()
    }
}
