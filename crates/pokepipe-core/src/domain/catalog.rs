//! Read models for browsing persisted data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filter for listing stored pokemon.
///
/// Both criteria are case-insensitive. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonFilter {
    /// Substring the name must contain.
    pub name_contains: Option<String>,
    /// A row matches when any of its types is in this set.
    pub types: Vec<String>,
}

impl PokemonFilter {
    /// Restrict to names containing `needle`.
    #[must_use]
    pub fn with_name(mut self, needle: impl Into<String>) -> Self {
        self.name_contains = Some(needle.into());
        self
    }

    /// Add a type name to the accepted set.
    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.types.push(type_name.into());
        self
    }

    /// Lowercased, trimmed name needle, or `None` when blank.
    pub fn normalized_name(&self) -> Option<String> {
        self.name_contains
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Lowercased, deduplicated type names.
    pub fn normalized_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .types
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        types.sort();
        types.dedup();
        types
    }
}

/// An ability as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEntry {
    pub name: String,
    pub is_hidden: bool,
}

/// A stat as shown on a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub base_value: i64,
    pub effort: i64,
}

/// One row of a pokemon listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub id: i64,
    pub name: String,
    pub height_cm: i64,
    pub weight_kg: f64,
    pub bmi: Option<f64>,
    pub base_experience: Option<i64>,
    pub sprite_url: Option<String>,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// Abilities in slot order.
    pub abilities: Vec<AbilityEntry>,
}

/// Full view of one stored pokemon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub summary: PokemonSummary,
    /// Stats ordered by stat id.
    pub stats: Vec<StatEntry>,
    pub loaded_at: DateTime<Utc>,
}

/// Row counts of every persisted table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCounts {
    pub pokemon: i64,
    pub types: i64,
    pub abilities: i64,
    pub stats: i64,
    pub pokemon_types: i64,
    pub pokemon_abilities: i64,
    pub pokemon_stats: i64,
}
