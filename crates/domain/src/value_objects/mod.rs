//! Value objects shared by combatants and content records.

mod combatant_state;
mod quantity;
mod stat_block;
mod templates;

pub use combatant_state::{effective_stats, CombatantState, Effect, ModifierDirection};
pub use quantity::QuantitySpec;
pub use stat_block::{Attribute, StatBlock};
pub use templates::{DeedTier, MonsterTemplate};
