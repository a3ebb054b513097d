//! Collision rules - the 6-bit state -> state lookup applied each tick
//!
//! The table is built once from a list of symmetric state pairs and is
//! immutable afterwards. States without an explicit entry collide into
//! themselves (identity fallback). Construction validates that every
//! pair conserves particle count and that no state belongs to two pairs,
//! which makes the table an involution on its explicit domain by
//! construction. Rule sets can also arrive as a JSON bundle from the
//! frontend, mirroring how the sandbox loads its content bundle.

use serde::{Deserialize, Serialize};

use crate::core::error::RuleError;
use crate::domain::direction::{DirMask, DIR_ALL};

/// Supported rule bundle format
pub const RULE_BUNDLE_FORMAT_VERSION: u32 = 1;

/// Default FHP pair list.
///
/// This is the classic two- and three-body rule set with the historical
/// head-on 3-cycles ((27,45,54) and (9,18,36) families) reduced to their
/// first-declared pair; the full cyclic lists fail validation because a
/// state may only belong to one pair. See DESIGN.md.
pub const FHP_PAIRS: &[(u8, u8)] = &[
    (52, 25),
    (50, 41),
    (38, 11),
    (22, 13),
    (37, 19),
    (26, 44),
    (21, 42),
    (27, 45),
    (36, 18),
];

/// JSON rule bundle: `{ "format_version": 1, "pairs": [[a, b], ...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleBundle {
    pub format_version: u32,
    pub pairs: Vec<(u8, u8)>,
}

/// Immutable post-collision lookup over all 64 occupancy states
#[derive(Debug, Clone)]
pub struct CollisionTable {
    map: [DirMask; 64],
    explicit: [bool; 64],
}

impl CollisionTable {
    /// Build a table from symmetric pairs, validating the physical invariants
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Result<Self, RuleError> {
        let mut map: [DirMask; 64] = [0; 64];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as DirMask;
        }
        let mut explicit = [false; 64];

        for &(a, b) in pairs {
            if a > DIR_ALL {
                return Err(RuleError::StateOutOfRange(a));
            }
            if b > DIR_ALL {
                return Err(RuleError::StateOutOfRange(b));
            }
            if a.count_ones() != b.count_ones() {
                return Err(RuleError::CountNotConserved {
                    a,
                    b,
                    a_bits: a.count_ones(),
                    b_bits: b.count_ones(),
                });
            }
            for (from, to) in [(a, b), (b, a)] {
                let idx = from as usize;
                if explicit[idx] && map[idx] != to {
                    return Err(RuleError::ConflictingPair {
                        state: from,
                        existing: map[idx],
                        requested: to,
                    });
                }
                map[idx] = to;
                explicit[idx] = true;
            }
        }

        Ok(Self { map, explicit })
    }

    /// The built-in FHP rule set
    pub fn fhp() -> Self {
        // FHP_PAIRS is validated by the unit tests; a failure here is a bug
        // in the constant, not a runtime condition.
        Self::from_pairs(FHP_PAIRS).expect("built-in FHP pair list is valid")
    }

    /// Parse and validate a JSON rule bundle
    pub fn from_bundle_json(json: &str) -> Result<Self, RuleError> {
        let bundle: RuleBundle =
            serde_json::from_str(json).map_err(|e| RuleError::Parse(e.to_string()))?;
        if bundle.format_version != RULE_BUNDLE_FORMAT_VERSION {
            return Err(RuleError::FormatVersion(bundle.format_version));
        }
        Self::from_pairs(&bundle.pairs)
    }

    /// Post-collision state for `state` (identity where no rule applies)
    #[inline]
    pub fn collide(&self, state: DirMask) -> DirMask {
        self.map[(state & DIR_ALL) as usize]
    }

    /// Whether `state` has an explicit (non-identity-fallback) rule
    #[inline]
    pub fn has_rule(&self, state: DirMask) -> bool {
        self.explicit[(state & DIR_ALL) as usize]
    }
}

impl Default for CollisionTable {
    fn default() -> Self {
        Self::fhp()
    }
}
