// src/fetch/mod.rs
// =============================================================================
// Getting pages: either live over HTTP or from fixture files on disk.
//
// The crawler only sees the Fetcher trait, so tests can hand it canned pages
// and the CLI hands it an HttpFetcher.
// =============================================================================

mod http;

pub use http::HttpFetcher;

use crate::error::Result;
use crate::page::Page;

/// Source of pages for the crawler
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Downloads and parses `url`
    async fn fetch(&self, url: &str) -> Result<Page>;

    /// Loads `url` from the offline fixture store instead of the network
    async fn fetch_fixture(&self, url: &str) -> Result<Page>;
}
