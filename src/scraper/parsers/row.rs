//! Row parser: one table row of a race day page → one race record.

use scraper::{ElementRef, Html};

use crate::scraper::error::{Result, ScrapeError};
use crate::scraper::{id_from_href, selector};
use crate::types::{PageType, RaceRecord};

/// Parser for a single horse row of a fixture or result table.
///
/// Cells are identified by the column part of their class name, e.g.
/// `gunluk-GunlukYarisSonuclari-JokeAdi`. Race-level fields of the returned
/// record are left at their defaults.
#[derive(Debug, Clone, Copy)]
pub struct RowScraper {
    page_type: PageType,
}

impl RowScraper {
    pub fn new(page_type: PageType) -> Self {
        Self { page_type }
    }

    pub fn page_type(&self) -> PageType {
        self.page_type
    }

    /// Parse a `<tr>` element
    pub fn scrape(&self, row: &ElementRef) -> Result<RaceRecord> {
        let cells = RowCells::new(row)?;

        let (horse_name, horse_id) = cells.anchor("AtAdi")?;
        let (_, horse_father_id) = cells.anchor("Baba")?;
        let (_, horse_mother_id) = cells.anchor("Anne")?;
        let (_, jockey_id) = cells.anchor("JokeAdi")?;
        let (_, owner_id) = cells.anchor("SahipAdi")?;
        let (_, trainer_id) = cells.anchor("AntronorAdi")?;

        let mut record = RaceRecord {
            horse_id,
            jockey_id,
            owner_id,
            trainer_id,
            horse_weight: cells.text("Kilo")?.split_whitespace().collect(),
            horse_name,
            horse_age: cells.text("Yas")?,
            horse_father_id,
            horse_mother_id,
            order: parse_number("order", &cells.text("SiraId")?)?,
            ..Default::default()
        };

        if self.page_type == PageType::Result {
            record.result = Some(parse_number("result", &cells.text("SONUCNO")?)?);
            record.time = Some(cells.text("Derece")?);
            record.handicap = Some(parse_handicap(&cells.text("Hc")?)?);
        }

        Ok(record)
    }

    /// Parse a row from its stored outer HTML (`<tr>…</tr>`).
    ///
    /// A bare `<tr>` is dropped by the HTML tree builder outside of a table,
    /// so the markup is wrapped in a table body first.
    pub fn scrape_markup(&self, markup: &str) -> Result<RaceRecord> {
        let wrapped = format!("<table><tbody>{}</tbody></table>", markup);
        let fragment = Html::parse_fragment(&wrapped);
        let tr = selector("tr")?;
        let row = fragment
            .select(&tr)
            .next()
            .ok_or_else(|| ScrapeError::missing("tr"))?;
        self.scrape(&row)
    }
}

struct RowCells<'a> {
    cells: Vec<ElementRef<'a>>,
}

impl<'a> RowCells<'a> {
    fn new(row: &ElementRef<'a>) -> Result<Self> {
        let td = selector("td")?;
        Ok(Self {
            cells: row.select(&td).collect(),
        })
    }

    fn cell(&self, column: &str) -> Result<ElementRef<'a>> {
        let marker = format!("-{}", column);
        self.cells
            .iter()
            .find(|cell| cell.value().classes().any(|c| c.contains(&marker)))
            .copied()
            .ok_or_else(|| ScrapeError::missing(format!("td{}", marker)))
    }

    fn text(&self, column: &str) -> Result<String> {
        let cell = self.cell(column)?;
        Ok(cell.text().collect::<String>().trim().to_string())
    }

    /// Text and linked id of the first anchor in a cell; the text is kept
    /// as the site serves it, trailing spaces included
    fn anchor(&self, column: &str) -> Result<(String, i64)> {
        let cell = self.cell(column)?;
        let a = selector("a")?;
        let link = cell
            .select(&a)
            .next()
            .ok_or_else(|| ScrapeError::missing(format!("a in -{}", column)))?;
        let href = link.value().attr("href").unwrap_or_default();
        let id = id_from_href(href).ok_or_else(|| ScrapeError::invalid("link id", href))?;
        let text = link.text().collect::<String>();
        Ok((text, id))
    }
}

fn parse_number(field: &'static str, text: &str) -> Result<u32> {
    text.trim()
        .parse()
        .map_err(|_| ScrapeError::invalid(field, text))
}

/// Handicap points; an empty or dashed cell means no handicap (-1)
fn parse_handicap(text: &str) -> Result<i32> {
    match text.trim() {
        "" | "-" => Ok(-1),
        t => t.parse().map_err(|_| ScrapeError::invalid("handicap", t)),
    }
}
