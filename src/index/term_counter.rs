// src/index/term_counter.rs
// =============================================================================
// Counts how often each word appears on one page.
//
// Punctuation (the Unicode P categories) is turned into spaces, the text is
// lower-cased, and words are whatever is left between runs of whitespace.
// Symbols are not punctuation, so "C++" and "$5" stay whole.
// =============================================================================

use regex::Regex;
use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::page::dom;

/// Word counts for a single page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermCounter {
    counts: BTreeMap<String, u32>,
}

impl TermCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the words of every text node in `blocks`
    pub fn from_blocks(blocks: &[ElementRef<'_>]) -> Self {
        let mut counter = Self::new();
        for block in blocks {
            for text in dom::text_nodes(*block) {
                counter.process_text(text);
            }
        }
        counter
    }

    pub fn process_text(&mut self, text: &str) {
        let cleaned = punctuation().replace_all(text, " ").to_lowercase();
        for word in cleaned.split_whitespace() {
            self.increment(word);
        }
    }

    pub fn increment(&mut self, term: &str) {
        *self.counts.entry(term.to_string()).or_insert(0) += 1;
    }

    /// Count for `term`, 0 if it never appeared
    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Total number of words counted
    pub fn size(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(term, count)| (term.as_str(), *count))
    }
}

fn punctuation() -> &'static Regex {
    static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    // The pattern is a constant, so this cannot fail at runtime
    PUNCTUATION.get_or_init(|| Regex::new(r"\p{P}").unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_process_text_splits_and_lowercases() {
        let mut counter = TermCounter::new();
        counter.process_text("The cat, the hat. THE end!");

        assert_eq!(counter.get("the"), 3);
        assert_eq!(counter.get("cat"), 1);
        assert_eq!(counter.get("end"), 1);
        assert_eq!(counter.get("The"), 0);
        assert_eq!(counter.size(), 6);
    }

    #[test]
    fn test_symbols_stay_inside_words() {
        let mut counter = TermCounter::new();
        counter.process_text("C++ and a+b cost $5; don't.");

        assert_eq!(counter.get("c++"), 1);
        assert_eq!(counter.get("a+b"), 1);
        assert_eq!(counter.get("$5"), 1);
        assert_eq!(counter.get("c"), 0);
        assert_eq!(counter.get("don"), 1);
        assert_eq!(counter.get("t"), 1);
        assert_eq!(counter.size(), 7);
    }

    #[test]
    fn test_punctuation_only_text_counts_nothing() {
        let mut counter = TermCounter::new();
        counter.process_text("  --- ... !!  ");
        assert!(counter.is_empty());
    }

    #[test]
    fn test_from_blocks_counts_every_text_node() {
        let html = Html::parse_fragment(
            "<p>Java is <a href='/wiki/Island'>an island</a>.</p><p>Java is coffee</p>",
        );
        let selector = Selector::parse("p").unwrap();
        let blocks: Vec<_> = html.select(&selector).collect();

        let counter = TermCounter::from_blocks(&blocks);
        assert_eq!(counter.get("java"), 2);
        assert_eq!(counter.get("is"), 2);
        assert_eq!(counter.get("island"), 1);
        assert_eq!(counter.get("coffee"), 1);
        assert_eq!(counter.size(), 7);
    }
}
