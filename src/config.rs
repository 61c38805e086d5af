// src/config.rs
// =============================================================================
// Configuration for the crawler.
//
// Every field has a default, so a config file only needs the values it
// changes. The CLI loads the file (if given) and then applies its own flags
// on top.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Describes the site being crawled: where relative links point and which
/// parts of a page count as content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prepended to every admissible relative link
    pub base_url: String,
    /// Links whose href starts with this are in-site articles
    pub link_prefix: String,
    /// CSS selector for the content blocks of a page
    pub content_selector: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://en.wikipedia.org".to_string(),
            link_prefix: "/wiki/".to_string(),
            content_selector: "#mw-content-text p".to_string(),
        }
    }
}

/// Top-level settings for a crawl session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    pub site: SiteConfig,
    /// JSON file holding the persistent index
    pub index_path: PathBuf,
    /// Root directory for offline fixture pages
    pub fixture_dir: PathBuf,
    pub user_agent: String,
    /// Per-request timeout for live fetches
    pub timeout_secs: u64,
    /// How many pages a `crawl` command indexes before stopping
    pub max_pages: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            index_path: PathBuf::from("wiki-index.json"),
            fixture_dir: PathBuf::from("fixtures"),
            user_agent: format!("wiki-indexer/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 10,
            max_pages: 1,
        }
    }
}

impl CrawlerConfig {
    /// Reads a JSON config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}
