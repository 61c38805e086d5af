// src/error.rs
// =============================================================================
// Error types for the library.
//
// - CrawlError: everything a crawl step can fail with (fetch, parse, index)
// - IndexError: failures of the persistent word index
//
// The binary wraps these in anyhow for context; library callers can match
// on the variants.
// =============================================================================

use thiserror::Error;

/// Error type for crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    /// HTTP client error (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Reading a fixture page failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured content selector is not valid CSS
    #[error("invalid content selector '{0}'")]
    InvalidSelector(String),

    /// The index rejected a read or write
    #[error("index error: {0}")]
    Index(#[from] IndexError),
}

/// Error type for index operations
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A writer panicked while holding the index lock
    #[error("index lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, CrawlError>;
