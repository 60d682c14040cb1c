//! Counts command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_separator;

/// Execute the counts command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let counts = ctx.catalog().counts().await.map_err(CliError::from)?;

    println!("{:<18} {:>8}", "Table", "Rows");
    print_separator(27);
    for (table, rows) in [
        ("pokemon", counts.pokemon),
        ("type", counts.types),
        ("ability", counts.abilities),
        ("stat", counts.stats),
        ("pokemon_type", counts.pokemon_types),
        ("pokemon_ability", counts.pokemon_abilities),
        ("pokemon_stat", counts.pokemon_stats),
    ] {
        println!("{table:<18} {rows:>8}");
    }
    Ok(())
}
