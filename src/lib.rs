//! TJK race day scraper
//!
//! Fetches fixture and result pages for Turkish race days from tjk.org,
//! parses them into per-horse records and captures pages and records in
//! SQLite for replay.

pub mod config;
pub mod replay;
pub mod scraper;
pub mod storage;
pub mod types;

pub use crate::scraper::{HorseScraper, RaceDayScraper, RowScraper, ScrapeError};
pub use crate::types::{City, PageType, RaceRecord};
