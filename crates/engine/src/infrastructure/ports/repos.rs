//! Repository port traits for content-store access.

use async_trait::async_trait;
use broadsword_domain::{Creature, CreatureId, Deed, DeedId, EncounterTable, TableId};

use super::error::RepoError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreatureRepo: Send + Sync {
    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepoError>;

    /// Fetch several creatures at once. Missing ids are simply absent from
    /// the result, not an error.
    async fn get_many(&self, ids: &[CreatureId]) -> Result<Vec<Creature>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeedRepo: Send + Sync {
    /// Fetch several deeds at once. Missing ids are simply absent from the
    /// result, not an error.
    async fn get_many(&self, ids: &[DeedId]) -> Result<Vec<Deed>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EncounterTableRepo: Send + Sync {
    async fn get(&self, id: TableId) -> Result<Option<EncounterTable>, RepoError>;
}
