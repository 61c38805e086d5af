// src/index/file.rs
// =============================================================================
// A persistent index kept in a single JSON file.
//
// The file is read once when the index is opened (a missing file means an
// empty index) and rewritten after every store. Writes go to a sibling temp
// file first and are then renamed over the real one, so a crash mid-write
// leaves the previous version intact.
// =============================================================================

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use super::{Index, Postings, TermCounter};
use crate::error::IndexError;

#[derive(Debug)]
pub struct FileIndex {
    path: PathBuf,
    postings: Mutex<Postings>,
}

impl FileIndex {
    /// Opens the index at `path`, creating an empty one if the file does
    /// not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref().to_path_buf();

        let postings = if path.exists() {
            let raw = fs::read(&path)?;
            serde_json::from_slice(&raw)?
        } else {
            Postings::default()
        };

        debug!("Opened index at {}", path.display());
        Ok(Self {
            path,
            postings: Mutex::new(postings),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, Postings>, IndexError> {
        self.postings.lock().map_err(|_| IndexError::Poisoned)
    }

    fn persist(&self, postings: &Postings) -> Result<(), IndexError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_vec(postings)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Index for FileIndex {
    fn is_indexed(&self, url: &str) -> Result<bool, IndexError> {
        Ok(self.lock()?.contains(url))
    }

    fn store(&self, url: &str, counts: TermCounter) -> Result<(), IndexError> {
        let mut postings = self.lock()?;

        // Memory only changes once the new version is on disk
        let mut updated = postings.clone();
        updated.insert(url, counts);
        self.persist(&updated)?;
        *postings = updated;
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

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(text: &str) -> TermCounter {
        let mut counter = TermCounter::new();
        counter.process_text(text);
        counter
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let index = FileIndex::open(dir.path().join("index.json")).unwrap();
        assert!(index.indexed_urls().unwrap().is_empty());
    }

    #[test]
    fn test_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("index.json");

        {
            let index = FileIndex::open(&path).unwrap();
            index.store("https://x/wiki/A", counter("alpha beta alpha")).unwrap();
            index.store("https://x/wiki/B", counter("beta")).unwrap();
        }

        let reopened = FileIndex::open(&path).unwrap();
        assert!(reopened.is_indexed("https://x/wiki/A").unwrap());
        assert_eq!(reopened.get_count("https://x/wiki/A", "alpha").unwrap(), 2);

        let beta = reopened.get_counts("beta").unwrap();
        assert_eq!(beta.len(), 2);
        assert_eq!(beta["https://x/wiki/B"], 1);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_failed_write_leaves_index_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let index = FileIndex::open(blocker.join("index.json")).unwrap();
        assert_eq!(index.path(), blocker.join("index.json"));

        assert!(index.store("https://x/wiki/A", counter("alpha")).is_err());
        assert!(!index.is_indexed("https://x/wiki/A").unwrap());
        assert!(index.get_counts("alpha").unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(FileIndex::open(&path), Err(IndexError::Json(_))));
    }
}
