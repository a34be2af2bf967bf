//! CLI commands for tjk-scraper.
//!
//! Scrapes result/fixture pages and horse profiles, and replays captured
//! race days against the current parsers.

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use tjk_scraper::config::AppConfig;
use tjk_scraper::replay::verify_all;
use tjk_scraper::scraper::{Client, HorseProfile, HorseScraper, RaceDayScraper};
use tjk_scraper::storage::RaceRepository;
use tjk_scraper::types::{City, PageType, RaceRecord};

#[derive(Parser)]
#[command(name = "tjk-scraper")]
#[command(version, about = "Race day fixture and result scraper for tjk.org", long_about = None)]
pub struct Cli {
    /// Fixture database path override
    #[arg(long, global = true, value_name = "FILE")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape the results of a race day
    Results(RaceDayArgs),

    /// Scrape the program (fixtures) of a race day
    Fixtures(RaceDayArgs),

    /// Scrape a horse profile
    Horse {
        /// Horse id on tjk.org
        id: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Replay captured race days and report records that no longer reproduce
    Verify {
        /// Only replay one page type (fixture, result)
        #[arg(short, long)]
        page_type: Option<PageType>,
    },
}

#[derive(clap::Args)]
pub struct RaceDayArgs {
    /// City name (Adana, Izmir, Istanbul, Bursa, Ankara, Urfa, Elazig, Diyarbakir, Kocaeli, Antalya)
    pub city: City,

    /// Race date (YYYY-MM-DD)
    pub date: NaiveDate,

    /// Capture the page and parsed records as regression fixtures
    #[arg(short, long)]
    pub save: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

fn client(config: &AppConfig) -> anyhow::Result<Client> {
    Client::new(&config.scraper.base_url, &config.scraper.user_agent)
        .context("Failed to create HTTP client")
}

fn open_repository(config: &AppConfig) -> anyhow::Result<RaceRepository> {
    RaceRepository::new(Path::new(&config.storage.db_path))
}

/// Scrape one race day page.
pub fn run_race_day(config: &AppConfig, page_type: PageType, args: RaceDayArgs) -> anyhow::Result<()> {
    let client = client(config)?;
    let repo = if args.save {
        Some(open_repository(config)?)
    } else {
        None
    };

    let races = RaceDayScraper::scrap_by_date(&client, page_type, args.city, args.date, repo.as_ref())?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&races)?),
        OutputFormat::Table => print_races(page_type, &races),
    }

    if args.save {
        eprintln!("Saved to: {}", config.storage.db_path);
    }

    Ok(())
}

/// Scrape one horse page.
pub fn run_horse(config: &AppConfig, id: i64, format: OutputFormat) -> anyhow::Result<()> {
    let client = client(config)?;
    let profile = HorseScraper::scrap(&client, id)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
        OutputFormat::Table => print_horse(&profile),
    }

    Ok(())
}

/// Replay the fixture database; fails when anything no longer reproduces.
pub fn run_verify(config: &AppConfig, page_type: Option<PageType>) -> anyhow::Result<()> {
    let repo = open_repository(config)?;
    let report = verify_all(&repo, page_type)?;

    println!(
        "Race days: {}  rows: {}  records: {}  mismatches: {}",
        report.race_days,
        report.rows_checked,
        report.records_checked,
        report.mismatches.len()
    );
    for m in &report.mismatches {
        println!(
            "  day {} race {} horse {}: {}",
            m.race_day_id, m.race_id, m.horse_id, m.reason
        );
    }

    if !report.is_clean() {
        anyhow::bail!("{} captured records no longer reproduce", report.mismatches.len());
    }
    Ok(())
}

fn print_races(page_type: PageType, races: &[Vec<RaceRecord>]) {
    for race in races {
        let Some(first) = race.first() else { continue };
        println!(
            "=== Race {}: {} {} m {} ===",
            first.race_id, first.city, first.distance, first.track_type
        );
        for r in race {
            match page_type {
                PageType::Result => println!(
                    "  {:>2}. {:<24} #{:<2} {:>8}  jockey {:<5} hp {:>3}  {}",
                    r.result.unwrap_or_default(),
                    r.horse_name,
                    r.order,
                    r.time.as_deref().unwrap_or("-"),
                    r.jockey_id,
                    r.handicap.unwrap_or(-1),
                    r.horse_weight
                ),
                PageType::Fixture => println!(
                    "  #{:<2} {:<24} {:<8} jockey {:<5} trainer {:<5} {}",
                    r.order, r.horse_name, r.horse_age, r.jockey_id, r.trainer_id, r.horse_weight
                ),
            }
        }
        println!();
    }
}

fn print_horse(profile: &HorseProfile) {
    println!("Horse: {} ({})", profile.name, profile.horse_id);
    println!("Age: {}", profile.age);
    if let Some(id) = profile.father_id {
        println!("Father: {}", id);
    }
    if let Some(id) = profile.mother_id {
        println!("Mother: {}", id);
    }
    println!();

    println!("=== Past runs ===");
    for run in &profile.past_runs {
        println!(
            "  {:<10} {:<12} {:>5} {:<10} {:>3} {:>8}",
            run.date,
            run.city,
            run.distance.map(|d| d.to_string()).unwrap_or_default(),
            run.track_type,
            run.result.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
            run.time
        );
    }
}
