//! Types command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the types command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let names = ctx.catalog().type_names().await.map_err(CliError::from)?;
    if names.is_empty() {
        println!("No types stored. Run `pokepipe run` first.");
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}
