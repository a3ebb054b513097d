//! Engine error taxonomy
//!
//! Two conditions exist: a coordinate outside the grid (recoverable, the
//! single operation is rejected) and a malformed collision rule set
//! (fatal at construction - a non-physical table must never run).

use thiserror::Error;

/// Errors surfaced by the engine API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("coordinate ({row}, {col}) is outside the {rows}x{cols} grid")]
    InvalidCoordinate {
        row: i32,
        col: i32,
        rows: u32,
        cols: u32,
    },

    #[error("collision rules rejected: {0}")]
    Rules(#[from] RuleError),
}

/// Validation failures when building a collision table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("rule bundle is not valid JSON: {0}")]
    Parse(String),

    #[error("unsupported rule bundle format_version {0}")]
    FormatVersion(u32),

    #[error("state {0} is outside the 6-bit range 0..=63")]
    StateOutOfRange(u8),

    #[error("pair ({a}, {b}) does not conserve particle count ({a_bits} vs {b_bits} bits)")]
    CountNotConserved { a: u8, b: u8, a_bits: u32, b_bits: u32 },

    #[error("state {state} already maps to {existing}, conflicting pair wants {requested}")]
    ConflictingPair { state: u8, existing: u8, requested: u8 },
}
