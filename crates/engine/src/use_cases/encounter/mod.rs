//! The encounter use-cases: setup, per-round state, and the live session.

pub mod initializer;
pub mod peril;
pub mod rounds;
pub mod session;

pub use initializer::{EncounterInitializer, EncounterSpec, InitError, MonsterGroup};
pub use peril::PerilEngine;
pub use rounds::RoundStateStore;
pub use session::EncounterSession;
