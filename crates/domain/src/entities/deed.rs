//! Deed entity - a monster action referenced by creature templates.

use serde::{Deserialize, Serialize};

use crate::ids::DeedId;
use crate::value_objects::DeedTier;

/// A deed record from the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deed {
    pub id: DeedId,
    pub name: String,
    pub tier: DeedTier,
    pub description: String,
}

impl Deed {
    pub fn new(name: impl Into<String>, tier: DeedTier) -> Self {
        Self {
            id: DeedId::new(),
            name: name.into(),
            tier,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
