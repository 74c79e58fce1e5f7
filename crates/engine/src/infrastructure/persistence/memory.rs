//! In-memory content store.
//!
//! Backs the repository ports with plain maps. Used by tests and by
//! embedders that load content up front rather than querying a database.

use std::collections::HashMap;

use async_trait::async_trait;
use broadsword_domain::{Creature, CreatureId, Deed, DeedId, EncounterTable, TableId};

use crate::infrastructure::ports::{CreatureRepo, DeedRepo, EncounterTableRepo, RepoError};

/// Map-backed implementation of all content ports.
#[derive(Debug, Default)]
pub struct MemoryContent {
    creatures: HashMap<CreatureId, Creature>,
    deeds: HashMap<DeedId, Deed>,
    tables: HashMap<TableId, EncounterTable>,
}

impl MemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_creature(&mut self, creature: Creature) -> CreatureId {
        let id = creature.id;
        self.creatures.insert(id, creature);
        id
    }

    pub fn add_deed(&mut self, deed: Deed) -> DeedId {
        let id = deed.id;
        self.deeds.insert(id, deed);
        id
    }

    pub fn add_table(&mut self, table: EncounterTable) -> TableId {
        let id = table.id;
        self.tables.insert(id, table);
        id
    }
}

#[async_trait]
impl CreatureRepo for MemoryContent {
    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepoError> {
        Ok(self.creatures.get(&id).cloned())
    }

    async fn get_many(&self, ids: &[CreatureId]) -> Result<Vec<Creature>, RepoError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.creatures.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl DeedRepo for MemoryContent {
    async fn get_many(&self, ids: &[DeedId]) -> Result<Vec<Deed>, RepoError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.deeds.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl EncounterTableRepo for MemoryContent {
    async fn get(&self, id: TableId) -> Result<Option<EncounterTable>, RepoError> {
        Ok(self.tables.get(&id).cloned())
    }
}
