//! HTML parsers for tjk.org pages.

pub mod horse;
pub mod race_day;
pub mod row;

#[cfg(test)]
pub(crate) mod samples;

pub use horse::{HorseParser, HorseProfile, HorseScraper, PastRun};
pub use race_day::RaceDayScraper;
pub use row::RowScraper;
