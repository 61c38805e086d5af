// src/lib.rs
// =============================================================================
// wiki-indexer: a breadth-first wiki crawler that records the words of every
// page it visits in a persistent index.
//
// Modules:
// - config: site and crawl settings
// - page: fetched pages, their content blocks, and DOM traversal
// - fetch: live and fixture page fetching
// - crawl: link extraction, the frontier, and the crawl loop
// - index: word counting and index storage
// - telemetry: tracing setup for the binary
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod index;
pub mod page;
pub mod telemetry;

pub use config::{CrawlerConfig, SiteConfig};
pub use crawl::{CrawlOutcome, Crawler};
pub use error::{CrawlError, IndexError};
