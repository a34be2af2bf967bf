//! Blocking HTTP client for tjk.org

use std::time::Duration;
use tracing::info;

use super::error::Result;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Thin wrapper around a blocking reqwest client.
///
/// One GET per call: no timeout, no retry. Transport failures are returned
/// as they come out of reqwest.
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a page and return its body as text
    pub fn fetch_page(&self, url: &str) -> Result<String> {
        info!("Fetching {}", url);
        let html = self.http.get(url).send()?.error_for_status()?.text()?;
        Ok(html)
    }
}
