//! Horse profile parser for tjk.org.
//!
//! URL: http://www.tjk.org/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&QueryParameter_AtId=ID

use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::scraper::error::{Result, ScrapeError};
use crate::scraper::{horse_url, id_from_href, selector, stripped_strings, Client};

/// Horse profile data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HorseProfile {
    pub horse_id: i64,
    pub name: String,
    pub age: String,
    pub father_id: Option<i64>,
    pub mother_id: Option<i64>,
    pub past_runs: Vec<PastRun>,
}

/// One line of the horse's race history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PastRun {
    pub date: String,
    pub city: String,
    pub distance: Option<u32>,
    pub track_type: String,
    pub result: Option<u32>,
    pub time: String,
    pub weight: String,
    pub jockey_id: Option<i64>,
}

/// Parser for horse profile pages
pub struct HorseParser;

impl HorseParser {
    /// Parse horse profile from HTML.
    ///
    /// The profile block is required; history rows are read leniently.
    pub fn parse(html: &str, horse_id: i64, url: &str) -> Result<HorseProfile> {
        let document = Html::parse_document(html);

        let profile_sel = selector("div.horse-profile")?;
        let profile_block = document
            .select(&profile_sel)
            .next()
            .ok_or_else(|| ScrapeError::PageDoesNotExist {
                url: url.to_string(),
            })?;

        let h1 = selector("h1")?;
        let name = profile_block
            .select(&h1)
            .next()
            .map(|e| stripped_strings(&e).collect::<Vec<_>>().join(" "))
            .ok_or_else(|| ScrapeError::missing("h1 in div.horse-profile"))?;

        let age_sel = selector("span.horse-age")?;
        let age = profile_block
            .select(&age_sel)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let father_sel = selector("a.horse-father")?;
        let mother_sel = selector("a.horse-mother")?;

        Ok(HorseProfile {
            horse_id,
            name,
            age,
            father_id: Self::link_id(&profile_block, &father_sel),
            mother_id: Self::link_id(&profile_block, &mother_sel),
            past_runs: Self::parse_past_runs(&document)?,
        })
    }

    fn link_id(block: &ElementRef, sel: &scraper::Selector) -> Option<i64> {
        block
            .select(sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(id_from_href)
    }

    fn parse_past_runs(document: &Html) -> Result<Vec<PastRun>> {
        let rows = selector("table#queryTable tbody tr")?;
        let td = selector("td")?;
        let a = selector("a")?;

        let mut runs = Vec::new();
        for row in document.select(&rows) {
            let cells: Vec<_> = row.select(&td).collect();
            if cells.is_empty() {
                continue;
            }

            let cell = |column: &str| {
                let marker = format!("-{}", column);
                cells
                    .iter()
                    .find(|c| c.value().classes().any(|class| class.contains(&marker)))
            };
            let text = |column: &str| {
                cell(column)
                    .map(|c| c.text().collect::<String>().trim().to_string())
                    .unwrap_or_default()
            };

            runs.push(PastRun {
                date: text("Tarih"),
                city: text("Sehir"),
                distance: text("Mesafe").replace(' ', "").parse().ok(),
                track_type: text("Pist"),
                result: text("SONUCNO").parse().ok(),
                time: text("Derece"),
                weight: text("Kilo").split_whitespace().collect(),
                jockey_id: cell("JokeAdi")
                    .and_then(|c| c.select(&a).next())
                    .and_then(|link| link.value().attr("href"))
                    .and_then(id_from_href),
            });
        }

        Ok(runs)
    }
}

/// Fetches and parses horse pages
pub struct HorseScraper;

impl HorseScraper {
    pub fn scrap(client: &Client, horse_id: i64) -> Result<HorseProfile> {
        let url = horse_url(client.base_url(), horse_id);
        let html = client.fetch_page(&url)?;
        let profile = HorseParser::parse(&html, horse_id, &url)?;
        info!(
            "Horse {} ({}): {} past runs",
            horse_id,
            profile.name,
            profile.past_runs.len()
        );
        Ok(profile)
    }
}
