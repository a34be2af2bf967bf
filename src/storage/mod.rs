//! SQLite storage module for captured race days
//!
//! Keeps fetched pages and every parsed record with the row markup it came
//! from, so parsers can be re-checked against real pages without the network.

pub mod repository;
pub mod schema;

pub use repository::{RaceDayTestData, RaceRepository, StoredRecord};
pub use schema::create_tables;
