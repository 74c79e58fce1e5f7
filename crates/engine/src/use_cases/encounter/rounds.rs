//! Per-round roster snapshots.
//!
//! An append-only arena keyed by round number. Round N+1 is materialized
//! lazily by deep-copying round N, so editing one round can never bleed
//! into another.

use std::collections::BTreeMap;

use broadsword_domain::Combatant;

/// One roster snapshot per materialized round.
#[derive(Debug, Default)]
pub struct RoundStateStore {
    rounds: BTreeMap<u32, Vec<Combatant>>,
}

impl RoundStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store round 1's roster at session start.
    pub fn insert_initial(&mut self, roster: Vec<Combatant>) {
        self.rounds.insert(1, roster);
    }

    pub fn roster(&self, round: u32) -> Option<&Vec<Combatant>> {
        self.rounds.get(&round)
    }

    pub fn roster_mut(&mut self, round: u32) -> Option<&mut Vec<Combatant>> {
        self.rounds.get_mut(&round)
    }

    /// Rosters of every materialized round strictly after `round`,
    /// ascending. Used for forward-propagating player initiative.
    pub fn rosters_after_mut(&mut self, round: u32) -> impl Iterator<Item = &mut Vec<Combatant>> {
        self.rounds.range_mut(round + 1..).map(|(_, roster)| roster)
    }

    /// Rosters of every materialized round at or after `round`, ascending.
    pub fn rosters_from_mut(&mut self, round: u32) -> impl Iterator<Item = &mut Vec<Combatant>> {
        self.rounds.range_mut(round..).map(|(_, roster)| roster)
    }

    /// Materialize round `round + 1` from round `round` if it does not
    /// exist yet. Monsters carry HP and states forward unchanged; players
    /// start the new round with no initiative entered.
    ///
    /// Returns true when a new round was created.
    pub fn advance_from(&mut self, round: u32) -> bool {
        let next = round + 1;
        if self.rounds.contains_key(&next) {
            return false;
        }
        let Some(current) = self.rounds.get(&round) else {
            return false;
        };

        let mut next_roster = current.clone();
        for combatant in &mut next_roster {
            if let Combatant::Player(player) = combatant {
                player.reset_initiative();
            }
        }
        self.rounds.insert(next, next_roster);
        true
    }

    /// Round numbers materialized so far, ascending.
    pub fn materialized(&self) -> impl Iterator<Item = u32> + '_ {
        self.rounds.keys().copied()
    }
}
