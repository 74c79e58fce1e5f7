extern crate self as broadsword_domain;

pub mod combatant;
pub mod entities;
pub mod error;
pub mod ids;
pub mod peril;
pub mod turn_order;
pub mod value_objects;

// Re-export entities
pub use entities::{Creature, Deed, EncounterTable, TableEntry};

pub use error::DomainError;

// Re-export combatant types
pub use combatant::{Combatant, Monster, Player};

// Re-export turn order types
pub use turn_order::{TurnOrder, TurnOrderEntry};

// Re-export peril types
pub use peril::{peril_text, PerilRecord};

// Re-export ID types
pub use ids::{CombatantId, CreatureId, DeedId, StateId, TableId};

// Re-export value objects
pub use value_objects::{
    effective_stats, Attribute, CombatantState, DeedTier, Effect, ModifierDirection,
    MonsterTemplate, QuantitySpec, StatBlock,
};
