//! Shared types: cities, page types and the per-horse race record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Racecourse cities as numbered by tjk.org (`SehirId`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Adana,
    Izmir,
    Istanbul,
    Bursa,
    Ankara,
    Urfa,
    Elazig,
    Diyarbakir,
    Kocaeli,
    Antalya,
}

impl City {
    pub const ALL: [City; 10] = [
        City::Adana,
        City::Izmir,
        City::Istanbul,
        City::Bursa,
        City::Ankara,
        City::Urfa,
        City::Elazig,
        City::Diyarbakir,
        City::Kocaeli,
        City::Antalya,
    ];

    /// Numeric city code used in the `SehirId` query parameter
    pub fn code(self) -> u8 {
        match self {
            City::Adana => 1,
            City::Izmir => 2,
            City::Istanbul => 3,
            City::Bursa => 4,
            City::Ankara => 5,
            City::Urfa => 6,
            City::Elazig => 7,
            City::Diyarbakir => 8,
            City::Kocaeli => 9,
            City::Antalya => 10,
        }
    }

    /// Name used in the `SehirAdi` query parameter and stamped on records
    pub fn name(self) -> &'static str {
        match self {
            City::Adana => "Adana",
            City::Izmir => "Izmir",
            City::Istanbul => "Istanbul",
            City::Bursa => "Bursa",
            City::Ankara => "Ankara",
            City::Urfa => "Urfa",
            City::Elazig => "Elazig",
            City::Diyarbakir => "Diyarbakir",
            City::Kocaeli => "Kocaeli",
            City::Antalya => "Antalya",
        }
    }

    pub fn from_code(code: u8) -> Option<City> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn from_name(name: &str) -> Option<City> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::from_name(s).ok_or_else(|| format!("unknown city: {}", s))
    }
}

/// Kind of race day page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageType {
    /// Pre-race program (entries)
    Fixture,
    /// Post-race results
    Result,
}

impl PageType {
    /// Value stored in the `page_type` column
    pub fn value(self) -> u8 {
        match self {
            PageType::Fixture => 1,
            PageType::Result => 2,
        }
    }

    pub fn from_value(value: u8) -> Option<PageType> {
        match value {
            1 => Some(PageType::Fixture),
            2 => Some(PageType::Result),
            _ => None,
        }
    }

    /// Path keyword distinguishing the two page kinds in the race day URL
    pub fn race_type(self) -> &'static str {
        match self {
            PageType::Fixture => "GunlukYarisProgrami",
            PageType::Result => "GunlukYarisSonuclari",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageType::Fixture => f.write_str("fixture"),
            PageType::Result => f.write_str("result"),
        }
    }
}

impl std::str::FromStr for PageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixture" | "fixtures" => Ok(PageType::Fixture),
            "result" | "results" => Ok(PageType::Result),
            other => Err(format!("unknown page type: {}", other)),
        }
    }
}

/// One horse's entry (fixture) or outcome (result) within a race.
///
/// Race-level fields (`race_id`, `race_date`, `track_type`, `distance`,
/// `city`) are stamped by the race day scraper; the row scraper leaves them
/// at their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceRecord {
    pub race_id: i64,
    pub race_date: NaiveDate,
    pub horse_id: i64,
    pub jockey_id: i64,
    pub owner_id: i64,
    pub trainer_id: i64,
    pub horse_weight: String,
    pub track_type: String,
    pub distance: u32,
    pub city: String,
    pub horse_name: String,
    pub horse_age: String,
    pub horse_father_id: i64,
    pub horse_mother_id: i64,
    pub order: u32,
    pub result: Option<u32>,
    pub handicap: Option<i32>,
    pub time: Option<String>,
    pub race_day_id: Option<i64>,
}

impl Default for RaceRecord {
    fn default() -> Self {
        Self {
            race_id: 0,
            race_date: NaiveDate::default(),
            horse_id: 0,
            jockey_id: 0,
            owner_id: 0,
            trainer_id: 0,
            horse_weight: String::new(),
            track_type: String::new(),
            distance: 0,
            city: String::new(),
            horse_name: String::new(),
            horse_age: String::new(),
            horse_father_id: 0,
            horse_mother_id: 0,
            order: 0,
            result: None,
            handicap: None,
            time: None,
            race_day_id: None,
        }
    }
}

impl RaceRecord {
    /// Finish time in seconds, parsed from `M.SS.CC` or `SS.CC`
    pub fn time_as_seconds(&self) -> Option<f64> {
        self.time.as_deref().and_then(time_to_seconds)
    }
}

/// Convert a TJK finish time to seconds.
///
/// Goes through whole centiseconds so `"1.54.23"` yields exactly `114.23`.
pub fn time_to_seconds(time: &str) -> Option<f64> {
    let parts: Vec<&str> = time.trim().split('.').collect();
    let (minutes, seconds, centis) = match parts.as_slice() {
        [m, s, c] => (m.parse::<u64>().ok()?, s.parse::<u64>().ok()?, *c),
        [s, c] => (0, s.parse::<u64>().ok()?, *c),
        _ => return None,
    };
    if centis.len() != 2 {
        return None;
    }
    let centis: u64 = centis.parse().ok()?;
    let total = minutes
        .checked_mul(60)?
        .checked_add(seconds)?
        .checked_mul(100)?
        .checked_add(centis)?;
    Some(total as f64 / 100.0)
}

struct Opt<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Opt<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => fmt::Display::fmt(v, f),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for RaceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "race_id: {}|race_date: {}|horse_id: {}|jockey_id: {}|owner_id: {}|trainer_id: {}|\
             horse_weight: {}|track_type: {}|distance: {}|city: {}|horse_name: {}|horse_age: {}|\
             horse_father_id: {}|horse_mother_id: {}|order: {}|result: {}|handicap: {}|time: {}|\
             race_day_id: {}",
            self.race_id,
            self.race_date,
            self.horse_id,
            self.jockey_id,
            self.owner_id,
            self.trainer_id,
            self.horse_weight,
            self.track_type,
            self.distance,
            self.city,
            self.horse_name,
            self.horse_age,
            self.horse_father_id,
            self.horse_mother_id,
            self.order,
            Opt(&self.result),
            Opt(&self.handicap),
            Opt(&self.time),
            Opt(&self.race_day_id),
        )
    }
}
