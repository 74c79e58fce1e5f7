//! The live encounter session: round/turn advancement and combatant edits.
//!
//! A single-threaded state machine driven by discrete GM actions. State
//! transitions replace whole roster snapshots; turn order is re-derived
//! from the active roster on every query instead of being cached.

use broadsword_domain::{
    turn_order, Combatant, CombatantId, PerilRecord, Player, TurnOrder, TurnOrderEntry,
};

use crate::infrastructure::dice::DiceRoller;
use crate::use_cases::encounter::initializer::{EncounterInitializer, EncounterSpec, InitError};
use crate::use_cases::encounter::peril::PerilEngine;
use crate::use_cases::encounter::rounds::RoundStateStore;

/// One running combat. Dropped wholesale when the encounter ends; nothing
/// here survives the session.
pub struct EncounterSession {
    round: u32,
    turn_index: usize,
    rounds: RoundStateStore,
    peril: PerilEngine,
    roller: DiceRoller,
}

impl EncounterSession {
    /// Resolve the spec and open the session at round 1, turn 0.
    ///
    /// Initialization is the only fallible step of a session's life: a
    /// missing or zero-weight encounter table aborts here and no session
    /// exists. Every command after this point is total.
    pub async fn start(
        spec: &EncounterSpec,
        initializer: &EncounterInitializer,
        mut roller: DiceRoller,
    ) -> Result<Self, InitError> {
        let roster = initializer.resolve(spec, &mut roller).await?;
        tracing::info!(combatants = roster.len(), "encounter session starting");

        let mut rounds = RoundStateStore::new();
        let mut peril = PerilEngine::new();
        peril.roll_for(1, &roster, &mut roller);
        rounds.insert_initial(roster);

        Ok(Self {
            round: 1,
            turn_index: 0,
            rounds,
            peril,
            roller,
        })
    }

    // ──────────────────────────────────────────────────────────────────
    // Queries
    // ──────────────────────────────────────────────────────────────────

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    fn active_roster(&self) -> &[Combatant] {
        self.rounds
            .roster(self.round)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The active round's turn order, recomputed from the roster.
    pub fn turn_order(&self) -> TurnOrder {
        turn_order::compute(self.active_roster())
    }

    /// The entry whose turn it is, or None while players are still
    /// entering initiative.
    pub fn active_turn(&self) -> Option<TurnOrderEntry> {
        self.turn_order().entry_at(self.turn_index).cloned()
    }

    pub fn untracked_players(&self) -> Vec<Player> {
        self.turn_order().untracked_players
    }

    pub fn all_players_ready(&self) -> bool {
        self.turn_order().all_players_ready
    }

    /// The active round's peril. Every materialized round has one.
    pub fn peril(&self) -> Option<&PerilRecord> {
        self.peril.get(self.round)
    }

    // ──────────────────────────────────────────────────────────────────
    // Commands
    // ──────────────────────────────────────────────────────────────────

    /// Advance one turn, rolling into the next round past the last turn.
    /// No-op until every player has entered initiative.
    pub fn next_turn(&mut self) {
        let order = self.turn_order();
        if !order.all_players_ready {
            return;
        }

        if self.turn_index + 1 < order.len() {
            self.turn_index += 1;
            return;
        }

        // End of round: materialize the next one if this is the first
        // visit, then move the cursor to its start.
        let next = self.round + 1;
        if self.rounds.advance_from(self.round) {
            tracing::debug!(round = next, "materialized next round");
        }
        if let Some(roster) = self.rounds.roster(next) {
            // Memoized: a re-entered round keeps its original roll.
            self.peril.roll_for(next, roster, &mut self.roller);
        }
        self.round = next;
        self.turn_index = 0;
    }

    /// Step back one turn. At the top of a round this jumps to the
    /// *start* of the previous round, not its last turn; the tracker has
    /// always worked that way and tables are used to it.
    pub fn prev_turn(&mut self) {
        if self.turn_index > 0 {
            self.turn_index -= 1;
        } else if self.round > 1 {
            self.round -= 1;
            self.turn_index = 0;
        }
    }

    /// Replace the combatant with the same id in the active round.
    ///
    /// Player initiative entries also flow into rounds that were already
    /// materialized ahead of the cursor, so revisiting a future round
    /// shows the player's last-known initiative.
    pub fn update_combatant(&mut self, updated: Combatant) {
        let round = self.round;
        if let Some(roster) = self.rounds.roster_mut(round) {
            if let Some(slot) = roster.iter_mut().find(|c| c.id() == updated.id()) {
                *slot = updated.clone();
            }
        }

        if let Combatant::Player(player) = &updated {
            for roster in self.rounds.rosters_after_mut(round) {
                for combatant in roster.iter_mut() {
                    if let Combatant::Player(future) = combatant {
                        if future.id == player.id {
                            future.initiative = player.initiative;
                            future.nat20 = player.nat20;
                        }
                    }
                }
            }
        }
    }

    /// Add a late-joining player to the active round and every
    /// already-materialized round after it. Earlier rounds are history
    /// and stay as they were.
    pub fn add_player(&mut self, name: impl Into<String>) -> CombatantId {
        let player = Player::new(name);
        let id = player.id;
        tracing::debug!(player = %player.name, round = self.round, "player joined mid-encounter");
        for roster in self.rounds.rosters_from_mut(self.round) {
            roster.push(Combatant::Player(player.clone()));
        }
        id
    }
}
