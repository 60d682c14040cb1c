//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Command-line interface for the PokeAPI ETL pipeline.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "pokepipe")]
#[command(about = "Load PokeAPI data into a local SQLite database")]
#[command(version)]
pub struct Cli {
    /// Override the database path for this invocation (default: DB_PATH or pokemon.db)
    #[arg(long = "db-path", global = true)]
    pub db_path: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
