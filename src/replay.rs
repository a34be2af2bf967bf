//! Replay of captured race days against the current parsers.
//!
//! Two checks:
//! - row: re-parse the stored `<tr>` markup, overlay the race-level fields
//!   from the stored record and compare with the stored record;
//! - race day: re-parse the stored page and look every scraped record up by
//!   (horse_id, race_id) among the stored ones.

use serde::Serialize;
use tracing::{info, warn};

use crate::scraper::{RaceDayScraper, Result, RowScraper, ScrapeError};
use crate::storage::{RaceDayTestData, RaceRepository, StoredRecord};
use crate::types::{PageType, RaceRecord};

/// A record that no longer reproduces
#[derive(Debug, Clone, Serialize)]
pub struct Mismatch {
    pub race_day_id: i64,
    pub race_id: i64,
    pub horse_id: i64,
    pub reason: String,
}

/// Outcome of a replay run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplayReport {
    pub race_days: usize,
    pub rows_checked: usize,
    pub records_checked: usize,
    pub mismatches: Vec<Mismatch>,
}

impl ReplayReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Re-parse one stored row fixture; `Ok(None)` when it reproduces
pub fn verify_row(page_type: PageType, stored: &StoredRecord) -> Result<Option<String>> {
    let mut scraped = RowScraper::new(page_type).scrape_markup(&stored.html_row)?;

    // Race-level fields are not the row scraper's job
    let recorded = &stored.record;
    scraped.race_id = recorded.race_id;
    scraped.race_date = recorded.race_date;
    scraped.track_type = recorded.track_type.clone();
    scraped.city = recorded.city.clone();
    scraped.distance = recorded.distance;
    scraped.race_day_id = recorded.race_day_id;

    Ok(diff(recorded, &scraped))
}

/// Replay a stored race day page against its stored records
pub fn verify_race_day(day: &RaceDayTestData, stored: &[StoredRecord]) -> Result<Vec<Mismatch>> {
    let race_day_id = day
        .id
        .ok_or_else(|| ScrapeError::invalid("race_day_id", "unsaved race day"))?;
    let scraper = RaceDayScraper::from_test_data(day)?;

    let mut mismatches = Vec::new();
    for race in scraper.get()? {
        for mut scraped in race {
            scraped.race_day_id = Some(race_day_id);

            let recorded = stored
                .iter()
                .find(|s| s.record.horse_id == scraped.horse_id && s.record.race_id == scraped.race_id);

            let reason = match recorded {
                Some(s) => diff(&s.record, &scraped),
                None => Some("not in stored records".to_string()),
            };
            if let Some(reason) = reason {
                mismatches.push(Mismatch {
                    race_day_id,
                    race_id: scraped.race_id,
                    horse_id: scraped.horse_id,
                    reason,
                });
            }
        }
    }

    Ok(mismatches)
}

/// Replay every stored race day (optionally of one page type) and every row
pub fn verify_all(repo: &RaceRepository, page_type: Option<PageType>) -> Result<ReplayReport> {
    let mut report = ReplayReport::default();

    for day in repo.race_days(page_type)? {
        let Some(race_day_id) = day.id else { continue };
        let day_page_type = PageType::from_value(day.page_type)
            .ok_or_else(|| ScrapeError::invalid("page_type", day.page_type.to_string()))?;
        let stored = repo.records_for_day(race_day_id)?;

        for record in &stored {
            report.rows_checked += 1;
            let outcome = verify_row(day_page_type, record).unwrap_or_else(|e| Some(e.to_string()));
            if let Some(reason) = outcome {
                report.mismatches.push(Mismatch {
                    race_day_id,
                    race_id: record.record.race_id,
                    horse_id: record.record.horse_id,
                    reason: format!("row: {}", reason),
                });
            }
        }

        match verify_race_day(&day, &stored) {
            Ok(mismatches) => report.mismatches.extend(mismatches),
            Err(e) => report.mismatches.push(Mismatch {
                race_day_id,
                race_id: 0,
                horse_id: 0,
                reason: format!("race day: {}", e),
            }),
        }
        report.records_checked += stored.len();
        report.race_days += 1;
    }

    for m in &report.mismatches {
        warn!(
            "Race day {} race {} horse {}: {}",
            m.race_day_id, m.race_id, m.horse_id, m.reason
        );
    }
    info!(
        "Replayed {} race days, {} rows, {} mismatches",
        report.race_days,
        report.rows_checked,
        report.mismatches.len()
    );

    Ok(report)
}

fn diff(recorded: &RaceRecord, scraped: &RaceRecord) -> Option<String> {
    if recorded == scraped {
        None
    } else {
        Some(format!("expected {} got {}", recorded, scraped))
    }
}
