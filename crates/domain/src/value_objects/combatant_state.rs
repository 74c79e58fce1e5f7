//! Status effects on combatants and the attribute overlay.
//!
//! States never write through to a monster's base stat block. The overlay
//! recomputes effective values from scratch on every read, so removing a
//! state is always a clean undo.

use serde::{Deserialize, Serialize};

use crate::ids::StateId;
use crate::value_objects::stat_block::{Attribute, StatBlock};

/// Whether an effect raises or lowers the targeted attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModifierDirection {
    Bonus,
    Penalty,
}

impl ModifierDirection {
    pub fn sign(self) -> i32 {
        match self {
            Self::Bonus => 1,
            Self::Penalty => -1,
        }
    }
}

/// The mechanical half of a status effect: which attribute moves, and
/// which way. Purely descriptive states carry no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    pub attribute: Attribute,
    pub direction: ModifierDirection,
}

/// A named status effect active on a combatant.
///
/// Intensity scales the effect: a "Slowed 2" state with a Speed penalty
/// effect subtracts 2 from effective Speed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatantState {
    pub id: StateId,
    pub name: String,
    pub intensity: u32,
    pub description: Option<String>,
    pub effect: Option<Effect>,
}

impl CombatantState {
    pub fn new(name: impl Into<String>, intensity: u32) -> Self {
        Self {
            id: StateId::new(),
            name: name.into(),
            intensity,
            description: None,
            effect: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_effect(mut self, attribute: Attribute, direction: ModifierDirection) -> Self {
        self.effect = Some(Effect {
            attribute,
            direction,
        });
        self
    }

    /// Signed delta this state contributes to its target attribute, if any.
    /// Intensities beyond `i32::MAX` saturate rather than wrap.
    pub fn delta(&self) -> Option<(Attribute, i32)> {
        let magnitude = i32::try_from(self.intensity).unwrap_or(i32::MAX);
        self.effect
            .map(|e| (e.attribute, magnitude * e.direction.sign()))
    }
}

/// Compute effective attributes from base attributes plus active states.
///
/// Multiple states targeting the same attribute accumulate additively.
/// Inputs are never mutated.
pub fn effective_stats(base: &StatBlock, states: &[CombatantState]) -> StatBlock {
    let mut effective = base.clone();
    for (attribute, delta) in states.iter().filter_map(CombatantState::delta) {
        effective.apply_delta(attribute, delta);
    }
    effective
}
