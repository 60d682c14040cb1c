//! Init-db command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the init-db command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    ctx.pipeline()
        .ensure_schema()
        .await
        .map_err(CliError::from)?;
    println!("Schema ready at {}", ctx.settings().db_path.display());
    Ok(())
}
