//! StatBlock and Attribute - monster stat management
//!
//! A monster's printed statistics. Status effects never write through to
//! these base values; effective values are computed by the overlay in
//! `combatant_state`.

use serde::{Deserialize, Serialize};

/// The numeric attributes a status effect can target.
///
/// The damage die is a notation string ("1d8"), not a number, so it is
/// deliberately not addressable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Hp,
    Speed,
    Initiative,
    Accuracy,
    Guard,
    Resist,
    RollBonus,
}

impl Attribute {
    /// All addressable attributes, in display order.
    pub const ALL: [Attribute; 7] = [
        Attribute::Hp,
        Attribute::Speed,
        Attribute::Initiative,
        Attribute::Accuracy,
        Attribute::Guard,
        Attribute::Resist,
        Attribute::RollBonus,
    ];
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Hp => "HP",
            Self::Speed => "Speed",
            Self::Initiative => "Initiative",
            Self::Accuracy => "Accuracy",
            Self::Guard => "Guard",
            Self::Resist => "Resist",
            Self::RollBonus => "Roll Bonus",
        };
        write!(f, "{name}")
    }
}

/// A creature's base statistics as printed on the stat card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub hp: i32,
    pub speed: i32,
    pub initiative: i32,
    pub accuracy: i32,
    pub guard: i32,
    pub resist: i32,
    pub roll_bonus: i32,
    /// Damage die notation, e.g. "1d8". Not a numeric attribute.
    pub damage_die: String,
}

impl StatBlock {
    /// Read the value of a numeric attribute.
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Hp => self.hp,
            Attribute::Speed => self.speed,
            Attribute::Initiative => self.initiative,
            Attribute::Accuracy => self.accuracy,
            Attribute::Guard => self.guard,
            Attribute::Resist => self.resist,
            Attribute::RollBonus => self.roll_bonus,
        }
    }

    /// Add a signed delta to a numeric attribute, saturating at the i32
    /// bounds.
    pub fn apply_delta(&mut self, attribute: Attribute, delta: i32) {
        let slot = match attribute {
            Attribute::Hp => &mut self.hp,
            Attribute::Speed => &mut self.speed,
            Attribute::Initiative => &mut self.initiative,
            Attribute::Accuracy => &mut self.accuracy,
            Attribute::Guard => &mut self.guard,
            Attribute::Resist => &mut self.resist,
            Attribute::RollBonus => &mut self.roll_bonus,
        };
        *slot = slot.saturating_add(delta);
    }
}
