//! Content-store entities consumed by the encounter engine.

mod creature;
mod deed;
mod encounter_table;

pub use creature::Creature;
pub use deed::Deed;
pub use encounter_table::{EncounterTable, TableEntry};
