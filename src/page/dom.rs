// src/page/dom.rs
// =============================================================================
// Walks the node tree under one content block.
//
// traverse() is a plain pre-order walk: the block itself first, then each
// child subtree left to right. That is document order. Every call starts a
// fresh walk, so a block can be traversed as often as needed.
// =============================================================================

use scraper::{ElementRef, Node};

/// Yields every node of `block`'s subtree in document order, starting with
/// the block element itself.
pub fn traverse<'a>(block: ElementRef<'a>) -> impl Iterator<Item = &'a Node> + 'a {
    block.descendants().map(|node| node.value())
}

/// Yields the text nodes of `block`, one string per node.
pub fn text_nodes<'a>(block: ElementRef<'a>) -> impl Iterator<Item = &'a str> + 'a {
    traverse(block).filter_map(|node| node.as_text().map(|text| &**text))
}
