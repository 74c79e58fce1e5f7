//! Per-round peril rolls, memoized.

use std::collections::HashMap;

use broadsword_domain::{Combatant, MonsterTemplate, PerilRecord};

use crate::infrastructure::dice::DiceRoller;

/// Rolls and remembers one peril event per round.
///
/// A round's record is rolled once, at the moment the round is
/// materialized, and never recomputed: roster edits after the fact
/// (a new player joining, monsters dying) do not touch it.
#[derive(Debug, Default)]
pub struct PerilEngine {
    records: HashMap<u32, PerilRecord>,
}

impl PerilEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll peril for `round` unless it was already rolled.
    pub fn roll_for(
        &mut self,
        round: u32,
        roster: &[Combatant],
        roller: &mut DiceRoller,
    ) -> &PerilRecord {
        self.records.entry(round).or_insert_with(|| {
            let roll = roller.roll_2d6();
            let tyrant_present = roster
                .iter()
                .filter_map(Combatant::as_monster)
                .any(|m| m.template == MonsterTemplate::Tyrant);
            PerilRecord::new(round, roll, tyrant_present)
        })
    }

    pub fn get(&self, round: u32) -> Option<&PerilRecord> {
        self.records.get(&round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadsword_domain::{peril_text, Creature, Monster, StatBlock};

    fn tyrant_roster() -> Vec<Combatant> {
        let creature = Creature::new("Wyrm", 8, StatBlock::default())
            .with_template(MonsterTemplate::Tyrant);
        vec![Combatant::Monster(Monster::from_creature(&creature, "Wyrm"))]
    }

    #[test]
    fn roll_is_banded_by_roster() {
        let mut engine = PerilEngine::new();
        let mut roller = DiceRoller::seeded(5);
        let record = engine.roll_for(1, &tyrant_roster(), &mut roller).clone();
        assert!((2..=12).contains(&record.roll));
        assert_eq!(record.text, peril_text(record.roll, true));
    }

    #[test]
    fn second_roll_for_same_round_is_a_read() {
        let mut engine = PerilEngine::new();
        let mut roller = DiceRoller::seeded(5);
        let roster = tyrant_roster();
        let first = engine.roll_for(1, &roster, &mut roller).clone();
        for _ in 0..10 {
            assert_eq!(engine.roll_for(1, &roster, &mut roller), &first);
        }
        assert_eq!(engine.get(1), Some(&first));
    }

    #[test]
    fn later_roster_changes_do_not_reroll() {
        let mut engine = PerilEngine::new();
        let mut roller = DiceRoller::seeded(5);
        let first = engine.roll_for(1, &[], &mut roller).clone();

        // A tyrant shows up after the roll: the record must not change.
        let record = engine.roll_for(1, &tyrant_roster(), &mut roller).clone();
        assert_eq!(record, first);
        assert_eq!(record.text, peril_text(record.roll, false));
    }

    #[test]
    fn rounds_roll_independently() {
        let mut engine = PerilEngine::new();
        let mut roller = DiceRoller::seeded(5);
        engine.roll_for(1, &[], &mut roller);
        engine.roll_for(2, &[], &mut roller);
        assert!(engine.get(1).is_some());
        assert!(engine.get(2).is_some());
        assert!(engine.get(3).is_none());
    }
}
