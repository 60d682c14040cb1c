//! Terminal output helpers shared by the handlers.

pub mod pokemon_display;
pub mod tables;

pub use pokemon_display::{format_abilities, format_bmi, format_run_summary};
pub use tables::{format_optional, print_separator, truncate_string};
