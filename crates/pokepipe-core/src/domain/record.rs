//! Canonical records produced by the transformer and consumed by the loader.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A type association of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub type_id: i64,
    pub name: String,
    pub slot: i64,
}

/// An ability association of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability_id: i64,
    pub name: String,
    /// Hidden abilities are not normally obtainable.
    pub is_hidden: bool,
    pub slot: i64,
}

/// A stat association of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    pub stat_id: i64,
    pub name: String,
    pub base_value: i64,
    pub effort: i64,
}

/// Normalized form of one detail payload.
///
/// All ids come from the remote system, which is what keeps repeated loads
/// idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub id: i64,
    pub name: String,
    pub base_experience: Option<i64>,
    pub height_cm: i64,
    pub weight_kg: f64,
    /// `None` exactly when `height_cm` is zero.
    pub bmi: Option<f64>,
    pub sprite_url: Option<String>,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatValue>,
}

/// Distinct reference entities (types, abilities, stats) of a batch, keyed by id.
///
/// When the same id shows up with different names, the last one seen wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceEntities {
    pub types: BTreeMap<i64, String>,
    pub abilities: BTreeMap<i64, String>,
    pub stats: BTreeMap<i64, String>,
}

impl ReferenceEntities {
    /// Collect the distinct reference entities of a batch.
    pub fn collect(batch: &[CanonicalRecord]) -> Self {
        let mut refs = Self::default();
        for record in batch {
            for t in &record.types {
                refs.types.insert(t.type_id, t.name.clone());
            }
            for a in &record.abilities {
                refs.abilities.insert(a.ability_id, a.name.clone());
            }
            for s in &record.stats {
                refs.stats.insert(s.stat_id, s.name.clone());
            }
        }
        refs
    }

    /// Total number of distinct entities across all three kinds.
    pub fn len(&self) -> usize {
        self.types.len() + self.abilities.len() + self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
