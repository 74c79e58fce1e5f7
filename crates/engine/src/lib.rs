//! Broadsword engine: live encounter sessions over stored game content.
//!
//! The domain crate owns the pure rules (turn order, attribute overlay,
//! peril bands); this crate owns everything stateful: content lookups
//! through repository ports, injected randomness, per-round snapshots,
//! and the session state machine the tracker UI drives.

pub mod infrastructure;
pub mod use_cases;

pub use infrastructure::dice::DiceRoller;
pub use infrastructure::persistence::MemoryContent;
pub use infrastructure::ports::{CreatureRepo, DeedRepo, EncounterTableRepo, RepoError};
pub use use_cases::encounter::{
    EncounterInitializer, EncounterSession, EncounterSpec, InitError, MonsterGroup, PerilEngine,
    RoundStateStore,
};
