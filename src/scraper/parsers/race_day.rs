//! Race day parser for tjk.org fixture (program) and result pages.
//!
//! URL: http://www.tjk.org/TR/YarisSever/Info/Sehir/{GunlukYarisProgrami|GunlukYarisSonuclari}
//!
//! Every race of the day sits in its own `div` directly under
//! `div.races-panes`; the race heading carries distance and track type and
//! the table body holds one row per horse.

use chrono::NaiveDate;
use scraper::{ElementRef, Html};
use tracing::{debug, info};

use super::row::RowScraper;
use crate::scraper::error::{Result, ScrapeError};
use crate::scraper::{race_day_url, selector, stripped_strings, Client};
use crate::storage::{RaceDayTestData, RaceRepository};
use crate::types::{City, PageType, RaceRecord};

/// All races of one city on one date, as published on a single page
#[derive(Debug, Clone)]
pub struct RaceDayScraper {
    page_type: PageType,
    city: City,
    date: NaiveDate,
    html: String,
    url: String,
}

/// Distance and track type shared by every row of a race
struct RaceHeader {
    race_id: i64,
    distance: u32,
    track_type: String,
}

impl RaceDayScraper {
    /// Build a scraper over already fetched HTML (replay)
    pub fn from_html(
        page_type: PageType,
        city: City,
        date: NaiveDate,
        html: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            page_type,
            city,
            date,
            html: html.into(),
            url: url.into(),
        }
    }

    /// Download the page for a city and date
    pub fn fetch(client: &Client, page_type: PageType, city: City, date: NaiveDate) -> Result<Self> {
        let url = race_day_url(client.base_url(), page_type, city, date);
        let html = client.fetch_page(&url)?;
        Ok(Self::from_html(page_type, city, date, html, url))
    }

    /// Rebuild a scraper from a captured race day
    pub fn from_test_data(data: &RaceDayTestData) -> Result<Self> {
        let city = City::from_code(data.city_id)
            .ok_or_else(|| ScrapeError::invalid("city_id", data.city_id.to_string()))?;
        let page_type = PageType::from_value(data.page_type)
            .ok_or_else(|| ScrapeError::invalid("page_type", data.page_type.to_string()))?;

        Ok(Self::from_html(
            page_type,
            city,
            data.date,
            data.html_source.clone(),
            data.url.clone(),
        ))
    }

    /// Race day row for the fixture store
    pub fn to_test_data(&self) -> RaceDayTestData {
        RaceDayTestData {
            id: None,
            html_source: self.html.clone(),
            url: self.url.clone(),
            city_id: self.city.code(),
            date: self.date,
            page_type: self.page_type.value(),
        }
    }

    pub fn page_type(&self) -> PageType {
        self.page_type
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Parse every race of the day, in document order
    pub fn get(&self) -> Result<Vec<Vec<RaceRecord>>> {
        Ok(self
            .get_with_markup()?
            .into_iter()
            .map(|race| race.into_iter().map(|(record, _)| record).collect())
            .collect())
    }

    /// Parse every race, keeping the outer HTML of the row each record came from
    pub fn get_with_markup(&self) -> Result<Vec<Vec<(RaceRecord, String)>>> {
        let document = Html::parse_document(&self.html);
        let row_scraper = RowScraper::new(self.page_type);

        let races_panes = selector("div.races-panes")?;
        let tbody = selector("tbody")?;
        let tr = selector("tr")?;

        let container = document
            .select(&races_panes)
            .next()
            .ok_or_else(|| ScrapeError::PageDoesNotExist {
                url: self.url.clone(),
            })?;

        let mut races = Vec::new();

        // Only the first level: each direct child div is one race
        for race_div in container
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == "div")
        {
            let header = Self::parse_header(&race_div)?;

            let body = race_div
                .select(&tbody)
                .next()
                .ok_or_else(|| ScrapeError::missing(format!("tbody in race {}", header.race_id)))?;

            let mut results = Vec::new();
            for row in body.select(&tr) {
                let mut record = row_scraper.scrape(&row)?;

                record.track_type = header.track_type.clone();
                record.distance = header.distance;
                record.race_id = header.race_id;
                record.city = self.city.name().to_string();
                record.race_date = self.date;

                results.push((record, row.html()));
            }

            debug!(
                "Race {}: {} m {}, {} rows",
                header.race_id,
                header.distance,
                header.track_type,
                results.len()
            );
            races.push(results);
        }

        info!(
            "Parsed {} {} races for {} on {}",
            races.len(),
            self.page_type,
            self.city,
            self.date
        );

        Ok(races)
    }

    fn parse_header(race_div: &ElementRef) -> Result<RaceHeader> {
        let details = selector("div.race-details")?;
        let config = selector("h3.race-config")?;

        let id_attr = race_div
            .value()
            .attr("id")
            .ok_or_else(|| ScrapeError::missing("race id attribute"))?;
        let race_id = id_attr
            .trim()
            .parse::<i64>()
            .map_err(|_| ScrapeError::invalid("race_id", id_attr))?;

        let heading = race_div
            .select(&details)
            .next()
            .ok_or_else(|| ScrapeError::missing(format!("div.race-details in race {}", race_id)))?
            .select(&config)
            .next()
            .ok_or_else(|| ScrapeError::missing(format!("h3.race-config in race {}", race_id)))?;

        let race_info: String = stripped_strings(&heading).collect();
        let (distance, track_type) = parse_race_config(&race_info)?;

        Ok(RaceHeader {
            race_id,
            distance,
            track_type,
        })
    }

    /// Persist the page and every parsed record with its row markup
    pub fn capture(&self, repo: &RaceRepository) -> Result<Vec<Vec<RaceRecord>>> {
        let races = self.get_with_markup()?;
        let race_day_id = repo.insert_race_day_with_records(
            &self.to_test_data(),
            races.iter().flatten().map(|(r, m)| (r, m.as_str())),
        )?;
        info!(
            "Captured race day {} ({} races) from {}",
            race_day_id,
            races.len(),
            self.url
        );

        Ok(races
            .into_iter()
            .map(|race| {
                race.into_iter()
                    .map(|(mut record, _)| {
                        record.race_day_id = Some(race_day_id);
                        record
                    })
                    .collect()
            })
            .collect())
    }

    /// Scrape the races of a city on a date.
    ///
    /// With a repository the fetched page and records are captured as
    /// regression fixtures.
    pub fn scrap_by_date(
        client: &Client,
        page_type: PageType,
        city: City,
        date: NaiveDate,
        repo: Option<&RaceRepository>,
    ) -> Result<Vec<Vec<RaceRecord>>> {
        let scraper = Self::fetch(client, page_type, city, date)?;
        match repo {
            Some(repo) => scraper.capture(repo),
            None => scraper.get(),
        }
    }

    /// Same as [`scrap_by_date`](Self::scrap_by_date) from year/month/day values
    pub fn scrap(
        client: &Client,
        page_type: PageType,
        city: City,
        year: i32,
        month: u32,
        day: u32,
        repo: Option<&RaceRepository>,
    ) -> Result<Vec<Vec<RaceRecord>>> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ScrapeError::InvalidDate { year, month, day })?;
        Self::scrap_by_date(client, page_type, city, date, repo)
    }
}

/// Split the race heading text into distance and track type.
///
/// `"2 Yaşlı İngilizler, 57 kg,1100\r\n\r\nÇim\r..."`: the part after the last
/// comma holds distance and track type separated by a blank line. The HTML
/// tree builder turns CRLF into LF, so both forms are accepted. The track
/// type ends at the first literal `\r` (backslash, r) the site leaves in the
/// text.
fn parse_race_config(race_info: &str) -> Result<(u32, String)> {
    let normalized = race_info.replace("\r\n", "\n");
    let tail = normalized.rsplit(',').next().unwrap_or_default();

    let mut parts = tail.split("\n\n");
    let distance_text = parts.next().unwrap_or_default();
    let track_text = parts
        .next()
        .ok_or_else(|| ScrapeError::invalid("race-config", race_info))?;

    let distance = distance_text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .parse::<u32>()
        .map_err(|_| ScrapeError::invalid("distance", distance_text))?;
    let track_type = track_text.split("\\r").next().unwrap_or_default().to_string();

    Ok((distance, track_type))
}
