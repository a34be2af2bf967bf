//! Web scraper module for tjk.org
//!
//! Provides the blocking HTTP client, row/race day/horse parsers and the
//! URL templates of the race day and horse pages.

pub mod client;
pub mod error;
pub mod parsers;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::OnceLock;

use crate::types::{City, PageType};

pub use client::Client;
pub use error::{Result, ScrapeError};
pub use parsers::{HorseProfile, HorseScraper, PastRun, RaceDayScraper, RowScraper};

/// Base URL for tjk.org
pub const BASE_URL: &str = "http://www.tjk.org";

/// Build race day URL
///
/// The date separator is the already encoded `%2F`, exactly as the site
/// emits it: `QueryParameter_Tarih=03%2F07%2F2017`.
pub fn race_day_url(base: &str, page_type: PageType, city: City, date: NaiveDate) -> String {
    format!(
        "{}/TR/YarisSever/Info/Sehir/{}?SehirId={}&QueryParameter_Tarih={}&SehirAdi={}",
        base,
        page_type.race_type(),
        city.code(),
        date.format("%d%%2F%m%%2F%Y"),
        city.name()
    )
}

/// Build horse profile URL
pub fn horse_url(base: &str, horse_id: i64) -> String {
    format!(
        "{}/TR/YarisSever/Query/ConnectedPage/AtKosuBilgileri?1=1&QueryParameter_AtId={}",
        base, horse_id
    )
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{}: {}", css, e)))
}

/// Text fragments of an element, each trimmed, empty ones dropped
pub(crate) fn stripped_strings<'a>(elem: &ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    elem.text().map(str::trim).filter(|s| !s.is_empty())
}

/// Numeric id at the end of a `QueryParameter_...Id=<n>` link
pub(crate) fn id_from_href(href: &str) -> Option<i64> {
    static ID_RE: OnceLock<Regex> = OnceLock::new();
    let re = ID_RE.get_or_init(|| Regex::new(r"Id=(\d+)").expect("static regex"));
    re.captures_iter(href)
        .last()
        .and_then(|caps| caps[1].parse().ok())
}
