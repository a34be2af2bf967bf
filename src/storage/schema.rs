//! SQLite schema definitions for captured race days
//!
//! Tables:
//! - race_days: Fetched page source with the city/date/page type it was requested for
//! - race_records: Parsed records paired with the raw row markup they came from

use rusqlite::{Connection, Result};

/// Create all tables in the database
pub fn create_tables(conn: &Connection) -> Result<()> {
    // Captured pages
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS race_days (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            html_source TEXT NOT NULL,
            url TEXT NOT NULL,
            city_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            page_type INTEGER NOT NULL,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
        [],
    )?;

    // Row fixtures
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS race_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            race_day_id INTEGER NOT NULL REFERENCES race_days(id) ON DELETE CASCADE,
            race_id INTEGER NOT NULL,
            race_date TEXT NOT NULL,
            horse_id INTEGER NOT NULL,
            jockey_id INTEGER NOT NULL,
            owner_id INTEGER NOT NULL,
            trainer_id INTEGER NOT NULL,
            horse_weight TEXT NOT NULL,
            track_type TEXT NOT NULL,
            distance INTEGER NOT NULL,
            city TEXT NOT NULL,
            horse_name TEXT NOT NULL,
            horse_age TEXT NOT NULL,
            horse_father_id INTEGER NOT NULL,
            horse_mother_id INTEGER NOT NULL,
            run_order INTEGER NOT NULL,
            result INTEGER,
            handicap INTEGER,
            time TEXT,
            html_row TEXT NOT NULL,
            UNIQUE(race_day_id, race_id, horse_id)
        )
        "#,
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_race_days_page_type ON race_days(page_type)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_race_records_day ON race_records(race_day_id)",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_race_records_horse ON race_records(horse_id, race_id)",
        [],
    )?;

    Ok(())
}
