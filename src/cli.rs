// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Two subcommands:
// - crawl: start from a seed page and index new pages
// - counts: look up a word in the index built by earlier crawls
//
// Flags given here win over values from --config.
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wiki-indexer",
    version,
    about = "Crawl a wiki breadth-first and index the words on each page",
    long_about = "wiki-indexer starts from one article, follows in-site article links in \
                  breadth-first order, and records how often each word appears on every \
                  page it visits. The index is kept in a JSON file between runs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl from a seed page and index new pages
    ///
    /// Example: wiki-indexer crawl https://en.wikipedia.org/wiki/Java_(programming_language)
    Crawl {
        /// Absolute URL of the first page to visit
        seed: String,

        /// Read pages from the fixture directory instead of the network,
        /// and re-index pages even if the index already has them
        #[arg(long)]
        testing: bool,

        /// Stop after this many pages have been indexed
        #[arg(long)]
        max_pages: Option<usize>,

        /// Path of the index file
        #[arg(long)]
        index: Option<PathBuf>,

        /// Directory holding fixture pages (used with --testing)
        #[arg(long)]
        fixtures: Option<PathBuf>,

        /// JSON config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// After crawling, print the counts for this word
        #[arg(long)]
        word: Option<String>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print how often a word appears on each indexed page
    ///
    /// Example: wiki-indexer counts the --json
    Counts {
        /// The word to look up (case-insensitive)
        term: String,

        /// Path of the index file
        #[arg(long)]
        index: Option<PathBuf>,

        /// JSON config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },
}
