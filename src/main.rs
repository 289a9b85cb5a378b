use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use prem::cli::{Cli, Command};
use prem::commands;
use prem::config::Config;
use prem::source::DataSource;

fn main() -> ExitCode {
    let _ = dotenvy::from_filename(".env");

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = Config::resolve(cli.cache_dir, cli.refresh).context("resolving configuration")?;
    let source = DataSource::new(&config)?;
    let report = match cli.command {
        Command::Next => commands::next_fixtures(&source).context("next fixtures")?,
        Command::Blanks => commands::blanks(&source).context("blanks")?,
        Command::Doubles => commands::doubles(&source).context("doubles")?,
    };
    Ok(report)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "prem=debug" } else { "prem=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
