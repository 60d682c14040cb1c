//! List command handler.

use anyhow::Result;
use pokepipe_core::PokemonFilter;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_abilities, format_bmi, format_optional, print_separator, truncate_string};

/// Execute the list command.
pub async fn execute(ctx: &CliContext, name: Option<String>, types: Vec<String>) -> Result<()> {
    let filter = PokemonFilter {
        name_contains: name,
        types,
    };
    let rows = ctx.catalog().list(&filter).await.map_err(CliError::from)?;

    if rows.is_empty() {
        println!("No pokemon found.");
        return Ok(());
    }

    println!(
        "{:<5} {:<20} {:>7} {:>8} {:>6} {:>5} {:<18} Abilities",
        "ID", "Name", "Ht(cm)", "Wt(kg)", "BMI", "XP", "Types"
    );
    print_separator(100);

    for p in &rows {
        println!(
            "{:<5} {:<20} {:>7} {:>8.1} {:>6} {:>5} {:<18} {}",
            p.id,
            truncate_string(&p.name, 20),
            p.height_cm,
            p.weight_kg,
            format_bmi(p.bmi),
            format_optional(p.base_experience),
            truncate_string(&p.types.join("/"), 18),
            format_abilities(&p.abilities),
        );
    }

    println!();
    println!("{} pokemon", rows.len());
    Ok(())
}
