//! Monster templates and deed tiers.

use serde::{Deserialize, Serialize};

/// Template tag on a creature, modifying HP rules and turn-order privileges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MonsterTemplate {
    #[default]
    Normal,
    /// Dies to any hit: instantiated with 1/1 HP and only light deeds.
    Underling,
    /// Acts twice per round.
    Paragon,
    /// Acts twice per round and upgrades the peril table.
    Tyrant,
}

impl MonsterTemplate {
    /// Paragons and tyrants get one extra action appended after the
    /// normal turn order.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, Self::Paragon | Self::Tyrant)
    }

    /// Underlings ignore the printed HP and spawn at 1/1.
    pub fn overrides_hp(self) -> bool {
        matches!(self, Self::Underling)
    }
}

impl std::fmt::Display for MonsterTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Underling => write!(f, "underling"),
            Self::Paragon => write!(f, "paragon"),
            Self::Tyrant => write!(f, "tyrant"),
        }
    }
}

/// Weight class of a deed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeedTier {
    Light,
    Heavy,
    Mighty,
}

impl std::fmt::Display for DeedTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Heavy => write!(f, "heavy"),
            Self::Mighty => write!(f, "mighty"),
        }
    }
}
