// src/index/memory.rs
// In-process index. Nothing survives the process.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{Index, Postings, TermCounter};
use crate::error::IndexError;

#[derive(Debug, Default)]
pub struct MemoryIndex {
    postings: Mutex<Postings>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Postings>, IndexError> {
        self.postings.lock().map_err(|_| IndexError::Poisoned)
    }
}

impl Index for MemoryIndex {
    fn is_indexed(&self, url: &str) -> Result<bool, IndexError> {
        Ok(self.lock()?.contains(url))
    }

    fn store(&self, url: &str, counts: TermCounter) -> Result<(), IndexError> {
        self.lock()?.insert(url, counts);
        Ok(())
    }

    fn get_counts(&self, term: &str) -> Result<HashMap<String, u32>, IndexError> {
        Ok(self.lock()?.counts(term))
    }

    fn get_count(&self, url: &str, term: &str) -> Result<u32, IndexError> {
        Ok(self.lock()?.count(url, term))
    }

    fn indexed_urls(&self) -> Result<Vec<String>, IndexError> {
        Ok(self.lock()?.urls())
    }
}
