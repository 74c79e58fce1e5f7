//! Peril - the per-round random event granting bonus enemy deeds.
//!
//! The 2d6 roll itself lives in the engine; this module owns the banding
//! of rolls into deed grants, which differs when a tyrant leads the
//! opposition.

use serde::{Deserialize, Serialize};

/// The memoized peril outcome for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerilRecord {
    pub round: u32,
    /// Sum of two d6 (2-12)
    pub roll: u8,
    pub text: String,
}

impl PerilRecord {
    pub fn new(round: u32, roll: u8, tyrant_present: bool) -> Self {
        Self {
            round,
            roll,
            text: peril_text(roll, tyrant_present).to_string(),
        }
    }
}

/// Deed grant for a 2d6 peril roll.
///
/// Tyrant encounters run one band hotter than ordinary ones.
pub fn peril_text(roll: u8, tyrant_present: bool) -> &'static str {
    if tyrant_present {
        match roll {
            ..=6 => "1 Heavy, 1 Light deed",
            7..=9 => "1 Mighty & 1 Light, or 2 Heavy deeds",
            _ => "1 Mighty, 1 Heavy deed",
        }
    } else {
        match roll {
            ..=6 => "1 Heavy deed",
            7..=9 => "1 Heavy, 1 Mighty deed",
            _ => "2 Heavy, 1 Mighty deed",
        }
    }
}
