//! tjk-scraper CLI
//!
//! Race day results, fixtures and horse profiles from tjk.org.

mod cli;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use tjk_scraper::config::AppConfig;
use tjk_scraper::{PageType, ScrapeError};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tjk_scraper=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<ScrapeError>() {
            Some(ScrapeError::PageDoesNotExist { url }) => {
                eprintln!("No race page for this request: {}", url);
                ExitCode::from(2)
            }
            _ => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load()?;

    // Override with CLI args
    if let Some(db) = cli.db {
        config.storage.db_path = db.to_string_lossy().to_string();
    }

    tracing::debug!("Configuration loaded: {:?}", config);

    match cli.command {
        Commands::Results(args) => cli::run_race_day(&config, PageType::Result, args),
        Commands::Fixtures(args) => cli::run_race_day(&config, PageType::Fixture, args),
        Commands::Horse { id, format } => cli::run_horse(&config, id, format),
        Commands::Verify { page_type } => cli::run_verify(&config, page_type),
    }
}
