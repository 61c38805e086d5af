// src/fetch/http.rs
// =============================================================================
// Fetches wiki pages over HTTP, or reads saved copies from disk.
//
// Live pages come from a single reqwest Client built once with a timeout and
// user agent; reusing it keeps connections pooled between crawl steps.
//
// Fixtures mirror the site on disk as <fixture_dir>/<host><path>, so
//   https://en.wikipedia.org/wiki/Java
// is read from
//   fixtures/en.wikipedia.org/wiki/Java
// =============================================================================

use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::Fetcher;
use crate::config::CrawlerConfig;
use crate::error::{CrawlError, Result};
use crate::page::Page;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    fixture_dir: PathBuf,
    content_selector: String,
}

impl HttpFetcher {
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            fixture_dir: config.fixture_dir.clone(),
            content_selector: config.site.content_selector.clone(),
        })
    }

    /// Where the fixture copy of `url` lives
    pub fn fixture_path(&self, url: &str) -> Result<PathBuf> {
        let parsed = Url::parse(url)?;
        let host = parsed.host_str().ok_or(url::ParseError::EmptyHost)?;

        Ok(self
            .fixture_dir
            .join(host)
            .join(parsed.path().trim_start_matches('/')))
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Page> {
        let parsed = Url::parse(url)?;

        debug!("GET {}", url);
        let response = self.client.get(parsed).send().await?;

        if !response.status().is_success() {
            return Err(CrawlError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let html = response.text().await?;
        Page::parse(url, &html, &self.content_selector)
    }

    async fn fetch_fixture(&self, url: &str) -> Result<Page> {
        let path = self.fixture_path(url)?;

        debug!("Reading fixture {}", path.display());
        let html = tokio::fs::read_to_string(&path).await?;
        Page::parse(url, &html, &self.content_selector)
    }
}
