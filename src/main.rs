// src/main.rs
// =============================================================================
// Entry point of the wiki-indexer CLI.
//
// 1. Parse command-line arguments with clap
// 2. Merge them over the config file (if any)
// 3. Run the subcommand
// 4. Exit with 0 on success, 2 on error
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use cli::{Cli, Commands};
use wiki_indexer::fetch::{Fetcher, HttpFetcher};
use wiki_indexer::index::{FileIndex, Index};
use wiki_indexer::{telemetry, Crawler, CrawlerConfig};

// One crawl step runs to completion before the next starts, so a
// single-threaded runtime is all we need.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    telemetry::init_tracing();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl {
            seed,
            testing,
            max_pages,
            index,
            fixtures,
            config,
            word,
            json,
        } => {
            let mut config = load_config(config)?;
            if let Some(max_pages) = max_pages {
                config.max_pages = max_pages;
            }
            if let Some(index) = index {
                config.index_path = index;
            }
            if let Some(fixtures) = fixtures {
                config.fixture_dir = fixtures;
            }
            handle_crawl(&seed, testing, &config, word.as_deref(), json).await
        }
        Commands::Counts {
            term,
            index,
            config,
            json,
        } => {
            let mut config = load_config(config)?;
            if let Some(index) = index {
                config.index_path = index;
            }
            handle_counts(&term, &config, json)
        }
    }
}

fn load_config(path: Option<PathBuf>) -> Result<CrawlerConfig> {
    match path {
        Some(path) => CrawlerConfig::load(&path),
        None => Ok(CrawlerConfig::default()),
    }
}

async fn handle_crawl(
    seed: &str,
    testing: bool,
    config: &CrawlerConfig,
    word: Option<&str>,
    json: bool,
) -> Result<()> {
    let fetcher = HttpFetcher::new(config).context("building HTTP client")?;
    let index = Arc::new(
        FileIndex::open(&config.index_path)
            .with_context(|| format!("opening index {}", config.index_path.display()))?,
    );

    info!("Using index {}", index.path().display());

    // A seed that is already indexed would be skipped in live mode and
    // leave the frontier empty, so queue its links up front.
    let mut preload = None;
    if !testing && index.is_indexed(seed)? {
        preload = Some(
            fetcher
                .fetch(seed)
                .await
                .with_context(|| format!("fetching seed {}", seed))?,
        );
    }

    let mut crawler = Crawler::new(seed, fetcher, Arc::clone(&index), config.site.clone())
        .with_context(|| format!("invalid seed URL {}", seed))?;
    if let Some(page) = preload {
        let queued = crawler.queue_internal_links(&page.blocks());
        info!("Seed already indexed; queued {} of its links", queued);
    }

    info!("Crawling from {} (testing: {})", seed, testing);
    let indexed = crawler
        .run(testing, config.max_pages)
        .await
        .context("crawl failed")?;

    if !json {
        println!("Indexed {} page(s):", indexed.len());
        for url in &indexed {
            println!("  {}", url);
        }
    }

    if let Some(word) = word {
        let counts = index.get_counts(word)?;
        print_counts(word, counts, json)?;
    } else if json {
        println!("{}", serde_json::to_string_pretty(&indexed)?);
    }

    Ok(())
}

fn handle_counts(term: &str, config: &CrawlerConfig, json: bool) -> Result<()> {
    let index = FileIndex::open(&config.index_path)
        .with_context(|| format!("opening index {}", config.index_path.display()))?;

    info!("Reading index {}", index.path().display());
    let counts = index.get_counts(term)?;
    print_counts(term, counts, json)
}

/// One row of a term lookup
#[derive(Debug, Serialize)]
struct TermCount {
    url: String,
    count: u32,
}

// Highest counts first, ties broken by URL so output is stable
fn sorted_counts(counts: HashMap<String, u32>) -> Vec<TermCount> {
    let mut rows: Vec<TermCount> = counts
        .into_iter()
        .map(|(url, count)| TermCount { url, count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.url.cmp(&b.url)));
    rows
}

fn print_counts(term: &str, counts: HashMap<String, u32>, json: bool) -> Result<()> {
    let rows = sorted_counts(counts);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("'{}' does not appear in the index", term);
        return Ok(());
    }

    println!("{:<8} {}", "COUNT", "URL");
    println!("{}", "=".repeat(70));
    for row in &rows {
        println!("{:<8} {}", row.count, row.url);
    }
    println!();
    println!("'{}' appears on {} page(s)", term, rows.len());
    Ok(())
}
