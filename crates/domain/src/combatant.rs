//! Combatant - a participant in a live encounter.
//!
//! Players and monsters share very little beyond identity, so the union is
//! an enum matched exhaustively at every consumption site rather than a
//! struct with a type tag.

use serde::{Deserialize, Serialize};

use crate::entities::Creature;
use crate::ids::{CombatantId, CreatureId, DeedId, StateId};
use crate::value_objects::{effective_stats, CombatantState, MonsterTemplate, StatBlock};

/// A player participant. Initiative is entered by hand each round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: CombatantId,
    pub name: String,
    pub initiative: i32,
    /// Natural-20 initiative roll: grants the first and last action of
    /// the round.
    pub nat20: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CombatantId::new(),
            name: name.into(),
            initiative: 0,
            nat20: false,
        }
    }

    /// A player is tracked once an initiative has been entered (or a
    /// nat20 declared). Untracked players block round progression.
    pub fn is_tracked(&self) -> bool {
        self.initiative > 0 || self.nat20
    }

    /// Fresh-round reset: initiative must be re-entered every round.
    pub fn reset_initiative(&mut self) {
        self.initiative = 0;
        self.nat20 = false;
    }
}

/// A monster instance spawned from a creature template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub id: CombatantId,
    pub name: String,
    pub creature_id: CreatureId,
    pub level: u32,
    pub role: String,
    pub template: MonsterTemplate,
    pub threat_rating: u32,
    /// Base attributes copied from the template; never mutated by states
    pub stats: StatBlock,
    pub current_hp: i32,
    pub max_hp: i32,
    pub deeds: Vec<DeedId>,
    pub states: Vec<CombatantState>,
}

impl Monster {
    /// Instantiate a monster from a creature template.
    ///
    /// Underlings ignore the printed HP and spawn at 1/1. The deed list is
    /// copied as-is; callers that need tier filtering (underlings again)
    /// override it with [`Monster::with_deeds`].
    pub fn from_creature(creature: &Creature, name: impl Into<String>) -> Self {
        let max_hp = if creature.template.overrides_hp() {
            1
        } else {
            creature.stats.hp
        };
        Self {
            id: CombatantId::new(),
            name: name.into(),
            creature_id: creature.id,
            level: creature.level,
            role: creature.role.clone(),
            template: creature.template,
            threat_rating: creature.threat_rating,
            stats: creature.stats.clone(),
            current_hp: max_hp,
            max_hp,
            deeds: creature.deeds.clone(),
            states: Vec::new(),
        }
    }

    pub fn with_deeds(mut self, deeds: Vec<DeedId>) -> Self {
        self.deeds = deeds;
        self
    }

    /// Effective attributes: base stats overlaid with active states.
    /// Recomputed on every call; never cached, never written back.
    pub fn effective_stats(&self) -> StatBlock {
        effective_stats(&self.stats, &self.states)
    }

    pub fn add_state(&mut self, state: CombatantState) {
        self.states.push(state);
    }

    /// Remove a state by id. Returns true if it was present.
    pub fn remove_state(&mut self, state_id: StateId) -> bool {
        let before = self.states.len();
        self.states.retain(|s| s.id != state_id);
        self.states.len() != before
    }
}

/// A participant in a live encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Combatant {
    Player(Player),
    Monster(Monster),
}

impl Combatant {
    pub fn id(&self) -> CombatantId {
        match self {
            Self::Player(p) => p.id,
            Self::Monster(m) => m.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Player(p) => &p.name,
            Self::Monster(m) => &m.name,
        }
    }

    pub fn initiative(&self) -> i32 {
        match self {
            Self::Player(p) => p.initiative,
            Self::Monster(m) => m.stats.initiative,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Self::Player(p) => Some(p),
            Self::Monster(_) => None,
        }
    }

    pub fn as_monster(&self) -> Option<&Monster> {
        match self {
            Self::Player(_) => None,
            Self::Monster(m) => Some(m),
        }
    }
}

impl From<Player> for Combatant {
    fn from(player: Player) -> Self {
        Self::Player(player)
    }
}

impl From<Monster> for Combatant {
    fn from(monster: Monster) -> Self {
        Self::Monster(monster)
    }
}
