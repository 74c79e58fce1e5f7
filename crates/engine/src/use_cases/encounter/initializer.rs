//! Encounter initialization: resolving a definition into round 1's roster.

use std::sync::Arc;

use broadsword_domain::{
    Combatant, Creature, CreatureId, DeedId, DeedTier, Monster, Player, QuantitySpec, TableId,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::dice::DiceRoller;
use crate::infrastructure::ports::{CreatureRepo, DeedRepo, EncounterTableRepo, RepoError};

/// Errors fatal to encounter setup. Nothing after setup can fail.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Encounter table not found: {0}")]
    TableNotFound(TableId),

    #[error("Encounter table '{0}' has no weighted entries")]
    EmptyTable(String),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// A batch of identical monsters to spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterGroup {
    pub creature_id: CreatureId,
    /// Quantity notation: fixed count or dice ("2d4")
    pub quantity: String,
}

/// What the session is started from: explicit monster groups or a
/// weighted encounter table, plus the players at the table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterSpec {
    pub monster_groups: Vec<MonsterGroup>,
    /// When set, the table takes the place of the explicit groups
    pub table: Option<TableId>,
    pub players: Vec<String>,
}

/// Resolves an [`EncounterSpec`] into the round-1 combatant roster.
///
/// Every content lookup completes before any roster is returned; callers
/// never see a partially-resolved encounter.
pub struct EncounterInitializer {
    creatures: Arc<dyn CreatureRepo>,
    deeds: Arc<dyn DeedRepo>,
    tables: Arc<dyn EncounterTableRepo>,
}

impl EncounterInitializer {
    pub fn new(
        creatures: Arc<dyn CreatureRepo>,
        deeds: Arc<dyn DeedRepo>,
        tables: Arc<dyn EncounterTableRepo>,
    ) -> Self {
        Self {
            creatures,
            deeds,
            tables,
        }
    }

    /// Resolve the spec into combatants. The roster comes back unordered;
    /// turn order is a separate, per-round computation.
    pub async fn resolve(
        &self,
        spec: &EncounterSpec,
        roller: &mut DiceRoller,
    ) -> Result<Vec<Combatant>, InitError> {
        let groups = match spec.table {
            Some(table_id) => vec![self.draw_from_table(table_id, roller).await?],
            None => spec.monster_groups.clone(),
        };

        let mut roster: Vec<Combatant> = Vec::new();
        for group in &groups {
            let Some(creature) = self.creatures.get(group.creature_id).await? else {
                // Recoverable: the rest of the roster is still valid.
                tracing::warn!(creature_id = %group.creature_id, "skipping unknown creature");
                continue;
            };

            let quantity = QuantitySpec::parse_lenient(&group.quantity)
                .resolve(&mut |sides| roller.roll_die(sides));
            let deeds = self.granted_deeds(&creature).await?;

            for index in 1..=quantity {
                let name = if quantity > 1 {
                    format!("{} {}", creature.name, index)
                } else {
                    creature.name.clone()
                };
                roster.push(Monster::from_creature(&creature, name).with_deeds(deeds.clone()).into());
            }
        }

        roster.extend(spec.players.iter().map(|name| Player::new(name).into()));
        Ok(roster)
    }

    /// Single weighted draw producing exactly one monster group.
    async fn draw_from_table(
        &self,
        table_id: TableId,
        roller: &mut DiceRoller,
    ) -> Result<MonsterGroup, InitError> {
        let table = self
            .tables
            .get(table_id)
            .await?
            .ok_or(InitError::TableNotFound(table_id))?;

        let total = table.total_weight();
        if total <= 0.0 {
            return Err(InitError::EmptyTable(table.name.clone()));
        }

        let draw = roller.draw_weight(total);
        let entry = table
            .pick(draw)
            .ok_or_else(|| InitError::EmptyTable(table.name.clone()))?;

        Ok(MonsterGroup {
            creature_id: entry.creature_id,
            quantity: entry.quantity.clone(),
        })
    }

    /// The deed list a spawned monster actually gets. Underlings are
    /// limited to light-tier deeds.
    async fn granted_deeds(&self, creature: &Creature) -> Result<Vec<DeedId>, InitError> {
        if !creature.template.overrides_hp() {
            return Ok(creature.deeds.clone());
        }
        let deeds = self.deeds.get_many(&creature.deeds).await?;
        Ok(deeds
            .into_iter()
            .filter(|d| d.tier == DeedTier::Light)
            .map(|d| d.id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockCreatureRepo, MockDeedRepo, MockEncounterTableRepo,
    };
    use broadsword_domain::{Deed, EncounterTable, MonsterTemplate, StatBlock};

    fn stats(hp: i32) -> StatBlock {
        StatBlock {
            hp,
            speed: 5,
            initiative: 9,
            accuracy: 3,
            guard: 10,
            resist: 10,
            roll_bonus: 1,
            damage_die: "1d8".to_string(),
        }
    }

    fn initializer_with(
        creatures: MockCreatureRepo,
        deeds: MockDeedRepo,
        tables: MockEncounterTableRepo,
    ) -> EncounterInitializer {
        EncounterInitializer::new(Arc::new(creatures), Arc::new(deeds), Arc::new(tables))
    }

    fn no_tables() -> MockEncounterTableRepo {
        MockEncounterTableRepo::new()
    }

    fn no_deeds() -> MockDeedRepo {
        MockDeedRepo::new()
    }

    #[tokio::test]
    async fn players_spawn_untracked() {
        let init = initializer_with(MockCreatureRepo::new(), no_deeds(), no_tables());
        let spec = EncounterSpec {
            players: vec!["Wren".to_string(), "Osric".to_string()],
            ..EncounterSpec::default()
        };

        let roster = init
            .resolve(&spec, &mut DiceRoller::seeded(1))
            .await
            .expect("resolve");

        assert_eq!(roster.len(), 2);
        for combatant in &roster {
            let player = combatant.as_player().expect("player");
            assert_eq!(player.initiative, 0);
            assert!(!player.nat20);
        }
    }

    #[tokio::test]
    async fn group_quantity_numbers_the_names() {
        let creature = Creature::new("Bog Fiend", 2, stats(12));
        let creature_id = creature.id;
        let mut creatures = MockCreatureRepo::new();
        creatures
            .expect_get()
            .withf(move |id| *id == creature_id)
            .returning(move |_| Ok(Some(creature.clone())));

        let init = initializer_with(creatures, no_deeds(), no_tables());
        let spec = EncounterSpec {
            monster_groups: vec![MonsterGroup {
                creature_id,
                quantity: "3".to_string(),
            }],
            ..EncounterSpec::default()
        };

        let roster = init
            .resolve(&spec, &mut DiceRoller::seeded(1))
            .await
            .expect("resolve");

        let names: Vec<&str> = roster.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Bog Fiend 1", "Bog Fiend 2", "Bog Fiend 3"]);
    }

    #[tokio::test]
    async fn quantity_of_one_keeps_the_plain_name() {
        let creature = Creature::new("Bog Fiend", 2, stats(12));
        let creature_id = creature.id;
        let mut creatures = MockCreatureRepo::new();
        creatures
            .expect_get()
            .returning(move |_| Ok(Some(creature.clone())));

        let init = initializer_with(creatures, no_deeds(), no_tables());
        let spec = EncounterSpec {
            monster_groups: vec![MonsterGroup {
                creature_id,
                quantity: "1".to_string(),
            }],
            ..EncounterSpec::default()
        };

        let roster = init
            .resolve(&spec, &mut DiceRoller::seeded(1))
            .await
            .expect("resolve");
        assert_eq!(roster[0].name(), "Bog Fiend");
    }

    #[tokio::test]
    async fn unparsable_quantity_degrades_to_one() {
        let creature = Creature::new("Bog Fiend", 2, stats(12));
        let creature_id = creature.id;
        let mut creatures = MockCreatureRepo::new();
        creatures
            .expect_get()
            .returning(move |_| Ok(Some(creature.clone())));

        let init = initializer_with(creatures, no_deeds(), no_tables());
        let spec = EncounterSpec {
            monster_groups: vec![MonsterGroup {
                creature_id,
                quantity: "many".to_string(),
            }],
            ..EncounterSpec::default()
        };

        let roster = init
            .resolve(&spec, &mut DiceRoller::seeded(1))
            .await
            .expect("resolve");
        assert_eq!(roster.len(), 1);
    }

    #[tokio::test]
    async fn unknown_creature_group_is_skipped() {
        let known = Creature::new("Bog Fiend", 2, stats(12));
        let known_id = known.id;
        let mut creatures = MockCreatureRepo::new();
        creatures.expect_get().returning(move |id| {
            if id == known_id {
                Ok(Some(known.clone()))
            } else {
                Ok(None)
            }
        });

        let init = initializer_with(creatures, no_deeds(), no_tables());
        let spec = EncounterSpec {
            monster_groups: vec![
                MonsterGroup {
                    creature_id: CreatureId::new(),
                    quantity: "2".to_string(),
                },
                MonsterGroup {
                    creature_id: known_id,
                    quantity: "1".to_string(),
                },
            ],
            players: vec!["Wren".to_string()],
            ..EncounterSpec::default()
        };

        let roster = init
            .resolve(&spec, &mut DiceRoller::seeded(1))
            .await
            .expect("resolve");

        // The bad group vanished; the good group and the player survive.
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name(), "Bog Fiend");
    }

    #[tokio::test]
    async fn underlings_spawn_at_one_hp_with_light_deeds_only() {
        let light = Deed::new("Shove", DeedTier::Light);
        let heavy = Deed::new("Crush", DeedTier::Heavy);
        let light_id = light.id;
        let creature = Creature::new("Thrall", 1, stats(14))
            .with_template(MonsterTemplate::Underling)
            .with_deeds(vec![light_id, heavy.id]);
        let creature_id = creature.id;

        let mut creatures = MockCreatureRepo::new();
        creatures
            .expect_get()
            .returning(move |_| Ok(Some(creature.clone())));
        let mut deeds = MockDeedRepo::new();
        deeds
            .expect_get_many()
            .returning(move |_| Ok(vec![light.clone(), heavy.clone()]));

        let init = initializer_with(creatures, deeds, no_tables());
        let spec = EncounterSpec {
            monster_groups: vec![MonsterGroup {
                creature_id,
                quantity: "1".to_string(),
            }],
            ..EncounterSpec::default()
        };

        let roster = init
            .resolve(&spec, &mut DiceRoller::seeded(1))
            .await
            .expect("resolve");
        let monster = roster[0].as_monster().expect("monster");
        assert_eq!(monster.current_hp, 1);
        assert_eq!(monster.max_hp, 1);
        assert_eq!(monster.deeds, vec![light_id]);
    }

    #[tokio::test]
    async fn missing_table_is_fatal() {
        let mut tables = MockEncounterTableRepo::new();
        tables.expect_get().returning(|_| Ok(None));

        let init = initializer_with(MockCreatureRepo::new(), no_deeds(), tables);
        let spec = EncounterSpec {
            table: Some(TableId::new()),
            ..EncounterSpec::default()
        };

        let result = init.resolve(&spec, &mut DiceRoller::seeded(1)).await;
        assert!(matches!(result, Err(InitError::TableNotFound(_))));
    }

    #[tokio::test]
    async fn zero_weight_table_is_fatal() {
        let table = EncounterTable::new("Hollow").with_entry(CreatureId::new(), "1", 0.0);
        let mut tables = MockEncounterTableRepo::new();
        tables.expect_get().returning(move |_| Ok(Some(table.clone())));

        let init = initializer_with(MockCreatureRepo::new(), no_deeds(), tables);
        let spec = EncounterSpec {
            table: Some(TableId::new()),
            ..EncounterSpec::default()
        };

        let result = init.resolve(&spec, &mut DiceRoller::seeded(1)).await;
        assert!(matches!(result, Err(InitError::EmptyTable(_))));
    }

    #[tokio::test]
    async fn table_draw_produces_exactly_one_group() {
        let creature = Creature::new("Bog Fiend", 2, stats(12));
        let creature_id = creature.id;
        let table = EncounterTable::new("Swamp").with_entry(creature_id, "2", 1.0);

        let mut tables = MockEncounterTableRepo::new();
        tables.expect_get().returning(move |_| Ok(Some(table.clone())));
        let mut creatures = MockCreatureRepo::new();
        creatures
            .expect_get()
            .returning(move |_| Ok(Some(creature.clone())));

        let init = initializer_with(creatures, no_deeds(), tables);
        let spec = EncounterSpec {
            table: Some(TableId::new()),
            // Explicit groups are ignored when a table is set
            monster_groups: vec![MonsterGroup {
                creature_id: CreatureId::new(),
                quantity: "5".to_string(),
            }],
            ..EncounterSpec::default()
        };

        let roster = init
            .resolve(&spec, &mut DiceRoller::seeded(1))
            .await
            .expect("resolve");
        assert_eq!(roster.len(), 2);
    }

    #[tokio::test]
    async fn weighted_draw_tracks_entry_weights() {
        // Weights 1 and 3: the heavy entry should win about 75% of draws.
        let light_creature = CreatureId::new();
        let heavy_creature = CreatureId::new();
        let table = EncounterTable::new("Swamp")
            .with_entry(light_creature, "1", 1.0)
            .with_entry(heavy_creature, "1", 3.0);

        let mut roller = DiceRoller::seeded(13);
        const DRAWS: usize = 10_000;
        let mut heavy_hits = 0usize;
        for _ in 0..DRAWS {
            let draw = roller.draw_weight(table.total_weight());
            let entry = table.pick(draw).expect("non-empty table");
            if entry.creature_id == heavy_creature {
                heavy_hits += 1;
            }
        }

        let share = heavy_hits as f64 / DRAWS as f64;
        assert!((share - 0.75).abs() < 0.02, "share drifted to {share}");
    }

    #[tokio::test]
    async fn dice_quantity_stays_in_range_with_sane_mean() {
        // 2d6 rolled 10k times: only values in [2,12], mean close to 7.
        let mut roller = DiceRoller::seeded(29);
        let spec = QuantitySpec::parse_lenient("2d6");
        let mut sum = 0u64;
        const ROLLS: u64 = 10_000;
        for _ in 0..ROLLS {
            let quantity = spec.resolve(&mut |sides| roller.roll_die(sides));
            assert!((2..=12).contains(&quantity));
            sum += u64::from(quantity);
        }
        let mean = sum as f64 / ROLLS as f64;
        assert!((mean - 7.0).abs() < 0.1, "mean drifted to {mean}");
    }
}
