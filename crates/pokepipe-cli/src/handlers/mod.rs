//! Command handlers for the CLI.
//!
//! Each handler follows the pattern:
//! ```ignore
//! pub async fn execute(ctx: &CliContext, /* args */) -> anyhow::Result<()>
//! ```
//!
//! Service errors are converted to [`CliError`](crate::error::CliError) so
//! `main` can pick the exit code.

pub mod counts;
pub mod init_db;
pub mod list;
pub mod run;
pub mod show;
pub mod types;
pub mod wipe;
