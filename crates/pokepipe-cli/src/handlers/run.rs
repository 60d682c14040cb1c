//! Run command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_run_summary;

/// Execute the run command.
pub async fn execute(ctx: &CliContext, limit: u32, offset: u32) -> Result<()> {
    let summary = ctx
        .pipeline()
        .run(limit, offset)
        .await
        .map_err(CliError::from)?;
    println!("{}", format_run_summary(&summary));
    Ok(())
}
