// src/crawl/frontier.rs
// =============================================================================
// The frontier: URLs waiting to be visited, in the order they were found.
//
// A plain FIFO over a VecDeque. Nothing is deduplicated on the way in; the
// crawler asks the index whether a URL is new when it comes out.
// =============================================================================

use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a URL to the back of the queue
    pub fn push(&mut self, url: impl Into<String>) {
        self.queue.push_back(url.into());
    }

    /// Removes the oldest URL, or None when nothing is left
    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The queued URLs, front first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }
}

impl Extend<String> for Frontier {
    fn extend<T: IntoIterator<Item = String>>(&mut self, urls: T) {
        self.queue.extend(urls);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_on_empty() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_fifo_with_interleaved_pops() {
        let mut frontier = Frontier::new();
        frontier.push("a");
        frontier.push("b");
        assert_eq!(frontier.pop().as_deref(), Some("a"));

        frontier.push("c");
        assert_eq!(frontier.pop().as_deref(), Some("b"));
        frontier.push("d");

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop().as_deref(), Some("c"));
        assert_eq!(frontier.pop().as_deref(), Some("d"));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut frontier = Frontier::new();
        frontier.extend(vec!["x".to_string(), "x".to_string()]);
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.iter().collect::<Vec<_>>(), vec!["x", "x"]);
    }
}
