//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands.
///
/// `run` is the pipeline itself; the rest manage or inspect the database.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a page of pokemon from PokeAPI and upsert them into the database
    Run {
        /// Number of pokemon to fetch (must be positive)
        #[arg(long, default_value_t = 20)]
        limit: u32,
        /// Listing offset to start from
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// Create the database tables if they do not exist
    InitDb,

    /// Drop all tables and their data
    Wipe {
        /// Required; wiping cannot be undone
        #[arg(long)]
        force: bool,
    },

    /// List stored pokemon
    List {
        /// Only names containing this text (case-insensitive)
        #[arg(long)]
        name: Option<String>,
        /// Only pokemon having any of these types (repeatable)
        #[arg(long = "type", value_name = "TYPE")]
        types: Vec<String>,
    },

    /// Show one stored pokemon with its stats
    Show {
        /// Exact pokemon name
        name: String,
    },

    /// List stored type names
    Types,

    /// Show row counts for every table
    Counts,
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use crate::commands::Commands;
    use clap::Parser;

    #[test]
    fn test_run_defaults() {
        let cli = Cli::parse_from(["pokepipe", "run"]);
        match cli.command {
            Some(Commands::Run { limit, offset }) => {
                assert_eq!(limit, 20);
                assert_eq!(offset, 0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_run_with_args() {
        let cli = Cli::parse_from(["pokepipe", "run", "--limit", "5", "--offset", "10"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Run {
                limit: 5,
                offset: 10
            })
        ));
    }

    #[test]
    fn test_negative_offset_is_rejected() {
        assert!(Cli::try_parse_from(["pokepipe", "run", "--offset", "-1"]).is_err());
    }

    #[test]
    fn test_list_repeatable_type() {
        let cli = Cli::parse_from([
            "pokepipe", "list", "--name", "saur", "--type", "grass", "--type", "fire",
        ]);
        match cli.command {
            Some(Commands::List { name, types }) => {
                assert_eq!(name.as_deref(), Some("saur"));
                assert_eq!(types, vec!["grass", "fire"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_wipe_flag() {
        let cli = Cli::parse_from(["pokepipe", "wipe"]);
        assert!(matches!(cli.command, Some(Commands::Wipe { force: false })));
    }
}
