// src/crawl/mod.rs
// =============================================================================
// Breadth-first crawling.
//
// Submodules:
// - links: which links are admissible, and turning them into absolute URLs
// - frontier: the FIFO of URLs still to visit
// - crawler: the step-by-step crawl loop tying fetcher, frontier and index
// =============================================================================

mod crawler;
mod frontier;
mod links;

pub use crawler::{CrawlOutcome, Crawler};
pub use frontier::Frontier;
pub use links::{extract_links, is_admissible};
