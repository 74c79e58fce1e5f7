//! Injectable randomness for dice rolls and weighted draws.
//!
//! All randomness in a session flows through one `DiceRoller` so tests can
//! seed it and replay exact sequences.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// The session's single source of randomness.
pub struct DiceRoller {
    rng: Box<dyn RngCore + Send>,
}

impl DiceRoller {
    /// OS-entropy roller for live sessions.
    pub fn from_entropy() -> Self {
        Self {
            rng: Box::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic roller for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Box::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Wrap an arbitrary RNG.
    pub fn with_rng(rng: Box<dyn RngCore + Send>) -> Self {
        Self { rng }
    }

    /// Uniform roll in [1, sides]. A zero-sided die is treated as d1.
    pub fn roll_die(&mut self, sides: u32) -> u32 {
        let sides = sides.max(1);
        self.rng.gen_range(1..=sides)
    }

    /// Two independent d6, summed (2-12). The peril roll.
    pub fn roll_2d6(&mut self) -> u8 {
        (self.roll_die(6) + self.roll_die(6)) as u8
    }

    /// Uniform draw in [0, total) for weighted table selection.
    pub fn draw_weight(&mut self, total: f64) -> f64 {
        self.rng.gen_range(0.0..total)
    }
}

impl std::fmt::Debug for DiceRoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiceRoller").finish_non_exhaustive()
    }
}
