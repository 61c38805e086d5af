// src/index/mod.rs
// =============================================================================
// The word index: which pages have been indexed, and how often each word
// appears on each of them.
//
// Submodules:
// - term_counter: per-page word counts
// - memory: an in-process index (tests, throwaway runs)
// - file: a persistent index stored as one JSON document
//
// Index methods take &self. Implementations lock internally, so one index
// can sit behind an Arc and feed several crawlers.
// =============================================================================

mod file;
mod memory;
mod term_counter;

pub use file::FileIndex;
pub use memory::MemoryIndex;
pub use term_counter::TermCounter;

use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::IndexError;

/// Storage for indexed pages
pub trait Index {
    /// Has `url` been indexed before?
    fn is_indexed(&self, url: &str) -> Result<bool, IndexError>;

    /// Replaces whatever was stored for `url` with `counts` and marks the
    /// URL as indexed.
    fn store(&self, url: &str, counts: TermCounter) -> Result<(), IndexError>;

    /// Counts the words in `blocks` and stores them under `url`
    fn index_page(&self, url: &str, blocks: &[ElementRef<'_>]) -> Result<(), IndexError> {
        self.store(url, TermCounter::from_blocks(blocks))
    }

    /// URL -> occurrences of `term`, for every page containing it
    fn get_counts(&self, term: &str) -> Result<HashMap<String, u32>, IndexError>;

    /// Occurrences of `term` on `url` (0 if either is unknown)
    fn get_count(&self, url: &str, term: &str) -> Result<u32, IndexError>;

    fn indexed_urls(&self) -> Result<Vec<String>, IndexError>;
}

/// The data shared by both index implementations.
///
/// `pages` is keyed by URL, `terms` is the inverted view keyed by word.
/// Both are kept in step by `insert`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Postings {
    pages: BTreeMap<String, TermCounter>,
    terms: BTreeMap<String, BTreeMap<String, u32>>,
}

impl Postings {
    pub(crate) fn contains(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    pub(crate) fn insert(&mut self, url: &str, counts: TermCounter) {
        if let Some(old) = self.pages.remove(url) {
            for (term, _) in old.iter() {
                if let Some(urls) = self.terms.get_mut(term) {
                    urls.remove(url);
                    if urls.is_empty() {
                        self.terms.remove(term);
                    }
                }
            }
        }

        for (term, count) in counts.iter() {
            self.terms
                .entry(term.to_string())
                .or_default()
                .insert(url.to_string(), count);
        }
        self.pages.insert(url.to_string(), counts);
    }

    pub(crate) fn counts(&self, term: &str) -> HashMap<String, u32> {
        self.terms
            .get(&term.to_lowercase())
            .map(|urls| urls.iter().map(|(u, c)| (u.clone(), *c)).collect())
            .unwrap_or_default()
    }

    pub(crate) fn count(&self, url: &str, term: &str) -> u32 {
        self.pages
            .get(url)
            .map(|counter| counter.get(&term.to_lowercase()))
            .unwrap_or(0)
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.pages.keys().cloned().collect()
    }
}
