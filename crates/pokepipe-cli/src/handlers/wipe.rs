//! Wipe command handler.

use anyhow::Result;
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the wipe command.
pub async fn execute(ctx: &CliContext, force: bool) -> Result<()> {
    if !force {
        return Err(CliError::Arguments(
            "wipe drops every table; pass --force to confirm".to_string(),
        )
        .into());
    }

    let path = ctx.settings().db_path.display();
    warn!(db = %path, "Dropping all tables");
    ctx.pipeline().wipe().await.map_err(CliError::from)?;
    println!("Dropped all tables in {path}");
    Ok(())
}
