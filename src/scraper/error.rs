//! Scraper error type.

use thiserror::Error;

/// Errors raised while fetching or parsing tjk.org pages
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The city/date (or horse id) has no page on the site
    #[error("page does not exist: {url}")]
    PageDoesNotExist { url: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("invalid date: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl ScrapeError {
    pub fn is_page_missing(&self) -> bool {
        matches!(self, ScrapeError::PageDoesNotExist { .. })
    }

    pub(crate) fn missing(what: impl Into<String>) -> Self {
        ScrapeError::MissingElement(what.into())
    }

    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        ScrapeError::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
