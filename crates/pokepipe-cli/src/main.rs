use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pokepipe_cli::error::exit_code_for;
use pokepipe_cli::{Cli, CliConfig, CliContext, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() {
    // Load .env before clap and the settings read the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = CliConfig::from_env(cli.db_path)?;
    let ctx: CliContext = bootstrap(config).await?;

    match command {
        Commands::Run { limit, offset } => handlers::run::execute(&ctx, limit, offset).await,
        Commands::InitDb => handlers::init_db::execute(&ctx).await,
        Commands::Wipe { force } => handlers::wipe::execute(&ctx, force).await,
        Commands::List { name, types } => handlers::list::execute(&ctx, name, types).await,
        Commands::Show { name } => handlers::show::execute(&ctx, &name).await,
        Commands::Types => handlers::types::execute(&ctx).await,
        Commands::Counts => handlers::counts::execute(&ctx).await,
    }
}
