//! Domain types for the pipeline.
//!
//! These types represent the core domain concepts of one extract/transform/load
//! run and of the persisted catalog. They are independent of any HTTP client
//! or database implementation.

mod catalog;
mod listing;
mod record;

pub use catalog::{
    AbilityEntry, PokemonDetail, PokemonFilter, PokemonSummary, StatEntry, TableCounts,
};
pub use listing::{ListingItem, RawDetailPayload};
pub use record::{AbilitySlot, CanonicalRecord, ReferenceEntities, StatValue, TypeSlot};
