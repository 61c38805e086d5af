// src/crawl/crawler.rs
// =============================================================================
// The crawl loop.
//
// Each call to crawl() is one step:
// 1. Pop the next URL from the frontier (stop if there is none)
// 2. In live mode, skip URLs the index already has
// 3. Fetch the page (live, or from fixtures in testing mode)
// 4. Queue every admissible link found in its content blocks
// 5. Hand the content blocks to the index
//
// A URL that fails to fetch is gone: it was popped and is not re-queued.
// The error goes straight back to the caller.
//
// The crawler owns its frontier. The index is shared (Arc) because several
// crawlers seeded from different pages may write to the same one.
// =============================================================================

use scraper::ElementRef;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

use super::frontier::Frontier;
use super::links::extract_links;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::index::Index;

/// What a single crawl step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// The page was fetched and indexed
    Indexed(String),
    /// The page was already in the index and was dropped without fetching
    AlreadyIndexed(String),
    /// The frontier is empty
    Exhausted,
}

pub struct Crawler<F, I> {
    source: String,
    frontier: Frontier,
    fetcher: F,
    index: Arc<I>,
    site: SiteConfig,
}

impl<F: Fetcher, I: Index> Crawler<F, I> {
    /// Creates a crawler whose frontier holds just `source`.
    ///
    /// Fails with `CrawlError::UrlParse` if `source` is not an absolute URL.
    pub fn new(
        source: impl Into<String>,
        fetcher: F,
        index: Arc<I>,
        site: SiteConfig,
    ) -> Result<Self> {
        let source = source.into();
        Url::parse(&source)?;

        let mut frontier = Frontier::new();
        frontier.push(source.clone());

        Ok(Self {
            source,
            frontier,
            fetcher,
            index,
            site,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn queue_size(&self) -> usize {
        self.frontier.len()
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn index(&self) -> &Arc<I> {
        &self.index
    }

    /// Queues the admissible links in `blocks`. Returns how many were queued.
    pub fn queue_internal_links(&mut self, blocks: &[ElementRef<'_>]) -> usize {
        let links = extract_links(blocks, &self.site);
        let count = links.len();
        self.frontier.extend(links);
        count
    }

    /// Runs one crawl step. See the module docs for the sequence.
    pub async fn crawl(&mut self, testing: bool) -> Result<CrawlOutcome> {
        let Some(url) = self.frontier.pop() else {
            debug!("Frontier is empty");
            return Ok(CrawlOutcome::Exhausted);
        };

        if !testing && self.index.is_indexed(&url)? {
            debug!("Skipping {}: already indexed", url);
            return Ok(CrawlOutcome::AlreadyIndexed(url));
        }

        let page = if testing {
            self.fetcher.fetch_fixture(&url).await?
        } else {
            self.fetcher.fetch(&url).await?
        };

        let blocks = page.blocks();
        let queued = self.queue_internal_links(&blocks);
        self.index.index_page(&url, &blocks)?;

        info!(
            url = %url,
            blocks = blocks.len(),
            queued,
            frontier = self.frontier.len(),
            "Indexed page"
        );
        Ok(CrawlOutcome::Indexed(url))
    }

    /// Keeps crawling until one page is freshly indexed.
    ///
    /// Returns None if the frontier runs dry first.
    pub async fn crawl_until_indexed(&mut self, testing: bool) -> Result<Option<String>> {
        loop {
            match self.crawl(testing).await? {
                CrawlOutcome::Indexed(url) => return Ok(Some(url)),
                CrawlOutcome::AlreadyIndexed(_) => continue,
                CrawlOutcome::Exhausted => return Ok(None),
            }
        }
    }

    /// Indexes up to `max_pages` new pages, returning their URLs in visit
    /// order.
    pub async fn run(&mut self, testing: bool, max_pages: usize) -> Result<Vec<String>> {
        let mut indexed = Vec::new();

        while indexed.len() < max_pages {
            match self.crawl_until_indexed(testing).await? {
                Some(url) => indexed.push(url),
                None => break,
            }
        }

        info!(
            "Crawl from {} finished: {} page(s) indexed, {} queued",
            self.source,
            indexed.len(),
            self.frontier.len()
        );
        Ok(indexed)
    }
}
