//! Creature entity - the stored stat template monsters are spawned from.

use serde::{Deserialize, Serialize};

use crate::ids::{CreatureId, DeedId};
use crate::value_objects::{MonsterTemplate, StatBlock};

/// A creature record from the content store.
///
/// Creatures are static content; live monsters are instantiated from them
/// at encounter start and carry their own mutable copy of the stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    pub level: u32,
    /// Freeform role label, e.g. "Skirmisher" or "Artillery"
    pub role: String,
    pub template: MonsterTemplate,
    pub threat_rating: u32,
    pub stats: StatBlock,
    /// Deeds this creature can perform
    pub deeds: Vec<DeedId>,
}

impl Creature {
    pub fn new(name: impl Into<String>, level: u32, stats: StatBlock) -> Self {
        Self {
            id: CreatureId::new(),
            name: name.into(),
            level,
            role: String::new(),
            template: MonsterTemplate::Normal,
            threat_rating: 0,
            stats,
            deeds: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_template(mut self, template: MonsterTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_threat_rating(mut self, threat_rating: u32) -> Self {
        self.threat_rating = threat_rating;
        self
    }

    pub fn with_deeds(mut self, deeds: Vec<DeedId>) -> Self {
        self.deeds = deeds;
        self
    }
}
