//! Turn-order calculation for one round of combat.
//!
//! Pure function over a round's roster. The controller recomputes the
//! order on every query rather than caching it, so mutation sites never
//! have to remember to invalidate anything.
//!
//! Ordering rules:
//! - Players who rolled a natural 20 act first AND last in the round.
//! - Players who beat every monster's initiative act before the monsters;
//!   the rest act after.
//! - Paragon and tyrant monsters get one extra action appended after the
//!   normal order.
//! - All sorts are initiative-descending and stable: equal initiative
//!   keeps insertion order.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::combatant::{Combatant, Monster, Player};

/// One slot in a round's turn order.
///
/// `turn_id` disambiguates duplicate appearances of the same combatant
/// (nat20 players and paragon/tyrant monsters appear more than once).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOrderEntry {
    pub turn_id: String,
    pub combatant: Combatant,
}

/// The computed order for one round, plus readiness bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnOrder {
    pub entries: Vec<TurnOrderEntry>,
    /// Players still missing an initiative entry
    pub untracked_players: Vec<Player>,
    /// True when every player has entered an initiative (or nat20);
    /// vacuously true with no players
    pub all_players_ready: bool,
}

impl TurnOrder {
    /// The entry at `index`, or None when players are still entering
    /// initiative (no turn is active until everyone is tracked).
    pub fn entry_at(&self, index: usize) -> Option<&TurnOrderEntry> {
        if !self.all_players_ready {
            return None;
        }
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute the turn order for a round's roster.
pub fn compute(roster: &[Combatant]) -> TurnOrder {
    let players: Vec<&Player> = roster.iter().filter_map(Combatant::as_player).collect();
    let monsters: Vec<&Monster> = roster.iter().filter_map(Combatant::as_monster).collect();

    let untracked_players: Vec<Player> = players
        .iter()
        .filter(|p| !p.is_tracked())
        .map(|p| (*p).clone())
        .collect();
    let all_players_ready = untracked_players.is_empty();

    let mut nat20_players: Vec<&Player> = Vec::new();
    let mut other_players: Vec<&Player> = Vec::new();
    for player in players.iter().filter(|p| p.is_tracked()) {
        if player.nat20 {
            nat20_players.push(player);
        } else {
            other_players.push(player);
        }
    }

    let max_monster_initiative = monsters.iter().map(|m| m.stats.initiative).max();

    // With no monsters every tracked player outruns the (empty) monster block.
    let beats_monsters = |p: &Player| match max_monster_initiative {
        Some(max) => p.initiative > max,
        None => true,
    };
    let (mut high_players, mut low_players): (Vec<&Player>, Vec<&Player>) =
        other_players.into_iter().partition(|p| beats_monsters(p));

    // sort_by_key is stable: ties keep insertion order
    nat20_players.sort_by_key(|p| Reverse(p.initiative));
    high_players.sort_by_key(|p| Reverse(p.initiative));
    low_players.sort_by_key(|p| Reverse(p.initiative));
    let mut sorted_monsters = monsters.clone();
    sorted_monsters.sort_by_key(|m| Reverse(m.stats.initiative));

    let extra_turn_monsters: Vec<&Monster> = sorted_monsters
        .iter()
        .filter(|m| m.template.grants_extra_turn())
        .copied()
        .collect();

    let player_entry = |p: &&Player, suffix: &str| TurnOrderEntry {
        turn_id: format!("{}{}", p.id, suffix),
        combatant: Combatant::Player((*p).clone()),
    };
    let monster_entry = |m: &&Monster, suffix: &str| TurnOrderEntry {
        turn_id: format!("{}{}", m.id, suffix),
        combatant: Combatant::Monster((*m).clone()),
    };

    let mut entries = Vec::with_capacity(
        2 * nat20_players.len()
            + high_players.len()
            + low_players.len()
            + sorted_monsters.len()
            + extra_turn_monsters.len(),
    );
    entries.extend(nat20_players.iter().map(|p| player_entry(p, "-start")));
    entries.extend(high_players.iter().map(|p| player_entry(p, "")));
    entries.extend(sorted_monsters.iter().map(|m| monster_entry(m, "")));
    entries.extend(low_players.iter().map(|p| player_entry(p, "")));
    entries.extend(nat20_players.iter().map(|p| player_entry(p, "-end")));
    entries.extend(extra_turn_monsters.iter().map(|m| monster_entry(m, "-extra")));

    TurnOrder {
        entries,
        untracked_players,
        all_players_ready,
    }
}
