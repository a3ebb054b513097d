//! Hex directions as single-bit flags over a 6-bit occupancy state
//!
//! Bit order is fixed (E, SE, SW, W, NW, NE) and shared with the JS
//! frontend, which interprets the occupancy bytes it reads from linear
//! memory with the same constants.

/// Occupancy bitmask type (low 6 bits used)
pub type DirMask = u8;

pub const DIR_E: DirMask = 1 << 0;
pub const DIR_SE: DirMask = 1 << 1;
pub const DIR_SW: DirMask = 1 << 2;
pub const DIR_W: DirMask = 1 << 3;
pub const DIR_NW: DirMask = 1 << 4;
pub const DIR_NE: DirMask = 1 << 5;

/// All six direction bits set
pub const DIR_ALL: DirMask = 0b11_1111;

/// Bits a source cell injects every tick (the two downstream directions)
pub const SOURCE_EMISSION: DirMask = DIR_SE | DIR_SW;

/// One of the six hex directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    E = 0,
    Se = 1,
    Sw = 2,
    W = 3,
    Nw = 4,
    Ne = 5,
}

/// Fixed iteration order over all six directions (matches bit order)
pub const ALL_DIRECTIONS: [Direction; 6] = [
    Direction::E,
    Direction::Se,
    Direction::Sw,
    Direction::W,
    Direction::Nw,
    Direction::Ne,
];

const SQRT3_HALF: f32 = 0.866_025_4;

impl Direction {
    /// Bit index 0..5
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-bit mask for this direction
    #[inline]
    pub fn bit(self) -> DirMask {
        1 << (self as u8)
    }

    /// Direction for a bit index, `None` if out of 0..=5
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Direction::E),
            1 => Some(Direction::Se),
            2 => Some(Direction::Sw),
            3 => Some(Direction::W),
            4 => Some(Direction::Nw),
            5 => Some(Direction::Ne),
            _ => None,
        }
    }

    /// The reflection partner: E<->W, NE<->SW, NW<->SE (an involution)
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::E => Direction::W,
            Direction::Se => Direction::Nw,
            Direction::Sw => Direction::Ne,
            Direction::W => Direction::E,
            Direction::Nw => Direction::Se,
            Direction::Ne => Direction::Sw,
        }
    }

    /// Unit vector in math coordinates (+y up); used by the renderer for headings
    #[inline]
    pub fn unit_vector(self) -> (f32, f32) {
        match self {
            Direction::E => (1.0, 0.0),
            Direction::Se => (0.5, -SQRT3_HALF),
            Direction::Sw => (-0.5, -SQRT3_HALF),
            Direction::W => (-1.0, 0.0),
            Direction::Nw => (-0.5, SQRT3_HALF),
            Direction::Ne => (0.5, SQRT3_HALF),
        }
    }
}
