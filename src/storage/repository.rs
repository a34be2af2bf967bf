//! SQLite repository for captured race days and row fixtures

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

use super::schema::create_tables;
use crate::types::{PageType, RaceRecord};

/// A fetched race day page as stored for replay
#[derive(Debug, Clone, PartialEq)]
pub struct RaceDayTestData {
    /// Database id, `None` until stored
    pub id: Option<i64>,
    pub html_source: String,
    pub url: String,
    pub city_id: u8,
    pub date: NaiveDate,
    pub page_type: u8,
}

/// A stored record together with the row markup it was parsed from
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub id: i64,
    pub record: RaceRecord,
    pub html_row: String,
}

const RECORD_COLUMNS: &str = "r.id, r.race_day_id, r.race_id, r.race_date, r.horse_id, r.jockey_id, \
     r.owner_id, r.trainer_id, r.horse_weight, r.track_type, r.distance, r.city, r.horse_name, \
     r.horse_age, r.horse_father_id, r.horse_mother_id, r.run_order, r.result, r.handicap, \
     r.time, r.html_row";

/// Repository for captured race data
pub struct RaceRepository {
    conn: Connection,
}

impl RaceRepository {
    /// Create a new repository, initializing the database if needed
    pub fn new(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create database directory")?;
        }

        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database {}", db_path.display()))?;

        conn.execute("PRAGMA foreign_keys = ON", [])?;

        create_tables(&conn).context("Failed to create tables")?;

        Ok(Self { conn })
    }

    /// Create an in-memory repository (for testing)
    #[cfg(test)]
    pub fn in_memory() -> rusqlite::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        create_tables(&conn)?;
        Ok(Self { conn })
    }

    // ==================== Insert Operations ====================

    /// Insert a race day and return its id
    pub fn insert_race_day(&self, day: &RaceDayTestData) -> rusqlite::Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO race_days (html_source, url, city_id, date, page_type)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                day.html_source,
                day.url,
                day.city_id,
                day.date.to_string(),
                day.page_type,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a record fixture (upsert on race day, race and horse)
    pub fn insert_record(
        &self,
        race_day_id: i64,
        record: &RaceRecord,
        html_row: &str,
    ) -> rusqlite::Result<i64> {
        self.write_record("INSERT OR REPLACE", race_day_id, record, html_row)
    }

    fn write_record(
        &self,
        verb: &str,
        race_day_id: i64,
        record: &RaceRecord,
        html_row: &str,
    ) -> rusqlite::Result<i64> {
        let sql = format!(
            r#"
            {} INTO race_records
            (race_day_id, race_id, race_date, horse_id, jockey_id, owner_id, trainer_id,
             horse_weight, track_type, distance, city, horse_name, horse_age,
             horse_father_id, horse_mother_id, run_order, result, handicap, time, html_row)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)
            "#,
            verb
        );
        self.conn.execute(
            &sql,
            params![
                race_day_id,
                record.race_id,
                record.race_date.to_string(),
                record.horse_id,
                record.jockey_id,
                record.owner_id,
                record.trainer_id,
                record.horse_weight,
                record.track_type,
                record.distance,
                record.city,
                record.horse_name,
                record.horse_age,
                record.horse_father_id,
                record.horse_mother_id,
                record.order,
                record.result,
                record.handicap,
                record.time,
                html_row,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a race day and all of its record fixtures in one transaction.
    ///
    /// A (race, horse) pair seen twice on one page fails the whole capture.
    pub fn insert_race_day_with_records<'a>(
        &self,
        day: &RaceDayTestData,
        records: impl IntoIterator<Item = (&'a RaceRecord, &'a str)>,
    ) -> rusqlite::Result<i64> {
        let tx = self.conn.unchecked_transaction()?;
        let race_day_id = self.insert_race_day(day)?;
        for (record, html_row) in records {
            self.write_record("INSERT", race_day_id, record, html_row)?;
        }
        tx.commit()?;
        Ok(race_day_id)
    }

    // ==================== Query Operations ====================

    /// Stored race days, optionally of one page type, oldest first
    pub fn race_days(&self, page_type: Option<PageType>) -> rusqlite::Result<Vec<RaceDayTestData>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, html_source, url, city_id, date, page_type
            FROM race_days
            WHERE ?1 IS NULL OR page_type = ?1
            ORDER BY id
            "#,
        )?;

        let days = stmt
            .query_map([page_type.map(PageType::value)], |row| {
                Ok(RaceDayTestData {
                    id: Some(row.get(0)?),
                    html_source: row.get(1)?,
                    url: row.get(2)?,
                    city_id: row.get(3)?,
                    date: parse_date(row, 4)?,
                    page_type: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(days)
    }

    /// Record fixtures of one race day in insertion order
    pub fn records_for_day(&self, race_day_id: i64) -> rusqlite::Result<Vec<StoredRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM race_records r WHERE r.race_day_id = ?1 ORDER BY r.id",
            RECORD_COLUMNS
        ))?;

        let records = stmt
            .query_map([race_day_id], read_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    /// Record fixture of a horse in a race of the given race day
    pub fn find_record(
        &self,
        race_day_id: i64,
        horse_id: i64,
        race_id: i64,
    ) -> rusqlite::Result<Option<StoredRecord>> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {} FROM race_records r
                     WHERE r.race_day_id = ?1 AND r.horse_id = ?2 AND r.race_id = ?3",
                    RECORD_COLUMNS
                ),
                params![race_day_id, horse_id, race_id],
                read_record,
            )
            .optional()
    }

    /// One randomly picked record fixture of the given page type
    pub fn random_record(&self, page_type: PageType) -> rusqlite::Result<Option<StoredRecord>> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {} FROM race_records r
                     JOIN race_days d ON d.id = r.race_day_id
                     WHERE d.page_type = ?1
                     ORDER BY RANDOM() LIMIT 1",
                    RECORD_COLUMNS
                ),
                [page_type.value()],
                read_record,
            )
            .optional()
    }

    /// Number of stored record fixtures
    pub fn count_records(&self) -> rusqlite::Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM race_records", [], |row| row.get(0))
    }
}

fn parse_date(row: &Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let text: String = row.get(idx)?;
    NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn read_record(row: &Row) -> rusqlite::Result<StoredRecord> {
    Ok(StoredRecord {
        id: row.get(0)?,
        record: RaceRecord {
            race_day_id: Some(row.get(1)?),
            race_id: row.get(2)?,
            race_date: parse_date(row, 3)?,
            horse_id: row.get(4)?,
            jockey_id: row.get(5)?,
            owner_id: row.get(6)?,
            trainer_id: row.get(7)?,
            horse_weight: row.get(8)?,
            track_type: row.get(9)?,
            distance: row.get(10)?,
            city: row.get(11)?,
            horse_name: row.get(12)?,
            horse_age: row.get(13)?,
            horse_father_id: row.get(14)?,
            horse_mother_id: row.get(15)?,
            order: row.get(16)?,
            result: row.get(17)?,
            handicap: row.get(18)?,
            time: row.get(19)?,
        },
        html_row: row.get(20)?,
    })
}
