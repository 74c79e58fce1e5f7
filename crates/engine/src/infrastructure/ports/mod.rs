//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. They exist so the
//! content store can be swapped (in-memory for tests and embedders, a real
//! database elsewhere) without touching the encounter logic.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::{CreatureRepo, DeedRepo, EncounterTableRepo};

#[cfg(test)]
pub use repos::{MockCreatureRepo, MockDeedRepo, MockEncounterTableRepo};
