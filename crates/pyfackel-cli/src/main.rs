//! CLI entry point - the composition root.
//!
//! Parses arguments, wires adapters via bootstrap and dispatches to handlers.
//! Any error reaches `main` and exits the process with status 1.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pyfackel_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    // RUST_LOG wins; otherwise warnings only, or debug with --verbose
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads PYFACKEL_* defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(CliConfig::from_cli(&cli));

    match command {
        Commands::Install { dry_run, pip } => handlers::install::execute(&ctx, pip, *dry_run)?,
        Commands::Url { json } => handlers::url::execute(&ctx, *json)?,
        Commands::Probe => handlers::probe::execute(&ctx)?,
    }

    Ok(())
}
