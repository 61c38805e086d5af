// src/page/mod.rs
// =============================================================================
// A fetched page and its content blocks.
//
// A Page owns the parsed HTML document. Its content blocks are the elements
// matching the site's content selector (the article paragraphs by default),
// borrowed from the document in document order.
//
// Submodules:
// - dom: walks a block's node tree
// =============================================================================

pub mod dom;

use scraper::{ElementRef, Html, Selector};

use crate::error::{CrawlError, Result};

/// One fetched and parsed page
#[derive(Debug, Clone)]
pub struct Page {
    url: String,
    document: Html,
    content: Selector,
}

impl Page {
    /// Parses `html` and remembers which elements are content blocks.
    ///
    /// Fails only when `content_selector` is not valid CSS.
    pub fn parse(url: &str, html: &str, content_selector: &str) -> Result<Self> {
        let content = Selector::parse(content_selector)
            .map_err(|_| CrawlError::InvalidSelector(content_selector.to_string()))?;

        Ok(Self {
            url: url.to_string(),
            document: Html::parse_document(html),
            content,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The content blocks of this page, in document order
    pub fn blocks(&self) -> Vec<ElementRef<'_>> {
        self.document.select(&self.content).collect()
    }
}
