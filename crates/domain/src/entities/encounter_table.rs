//! Encounter table entity - weighted random monster selection.

use serde::{Deserialize, Serialize};

use crate::ids::{CreatureId, TableId};

/// One weighted row of an encounter table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableEntry {
    pub creature_id: CreatureId,
    /// Quantity notation: a fixed count ("3") or dice ("2d4")
    pub quantity: String,
    pub weight: f64,
}

/// A weighted encounter table from the content store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterTable {
    pub id: TableId,
    pub name: String,
    pub entries: Vec<TableEntry>,
    /// Combined threat rating across entries, for display
    pub total_tr: u32,
}

impl EncounterTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TableId::new(),
            name: name.into(),
            entries: Vec::new(),
            total_tr: 0,
        }
    }

    pub fn with_entry(
        mut self,
        creature_id: CreatureId,
        quantity: impl Into<String>,
        weight: f64,
    ) -> Self {
        self.entries.push(TableEntry {
            creature_id,
            quantity: quantity.into(),
            weight,
        });
        self
    }

    /// Sum of entry weights. A table with zero total weight cannot be
    /// drawn from and fails encounter initialization.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Walk the entries subtracting weights from `draw` (a uniform value in
    /// [0, total_weight)) until the remainder reaches zero. Returns None
    /// only for an empty or zero-weight table.
    pub fn pick(&self, draw: f64) -> Option<&TableEntry> {
        if self.total_weight() <= 0.0 {
            return None;
        }
        let mut remainder = draw;
        for entry in &self.entries {
            remainder -= entry.weight;
            if remainder <= 0.0 {
                return Some(entry);
            }
        }
        // draw landed beyond the cumulative weights (floating point edge)
        self.entries.last()
    }
}
