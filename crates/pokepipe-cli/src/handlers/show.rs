//! Show command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_abilities, format_bmi, format_optional, print_separator};

/// Execute the show command.
pub async fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    let Some(detail) = ctx.catalog().get(name).await.map_err(CliError::from)? else {
        return Err(CliError::Arguments(format!("no stored pokemon named '{name}'")).into());
    };
    let p = &detail.summary;

    println!("#{} {}", p.id, p.name);
    print_separator(40);
    println!("Height:          {} cm", p.height_cm);
    println!("Weight:          {:.1} kg", p.weight_kg);
    println!("BMI:             {}", format_bmi(p.bmi));
    println!("Base experience: {}", format_optional(p.base_experience));
    println!("Types:           {}", p.types.join(", "));
    println!("Abilities:       {}", format_abilities(&p.abilities));
    println!("Sprite:          {}", format_optional(p.sprite_url.as_deref()));
    println!(
        "Loaded at:       {}",
        detail.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    if !detail.stats.is_empty() {
        println!();
        println!("{:<18} {:>5} {:>6}", "Stat", "Base", "Effort");
        print_separator(31);
        for stat in &detail.stats {
            println!("{:<18} {:>5} {:>6}", stat.name, stat.base_value, stat.effort);
        }
    }
    Ok(())
}
