// src/crawl/links.rs
// =============================================================================
// Decides which links inside content blocks are worth crawling.
//
// A node is admissible when it is an <a> element whose href starts with the
// site's article prefix (e.g. "/wiki/"). Everything else is ignored:
// other elements, text nodes, external links, and anchors without an href.
//
// Admissible hrefs are relative, so the site base URL is prepended to make
// them absolute before they go anywhere near the frontier.
// =============================================================================

use scraper::{ElementRef, Node};

use crate::config::SiteConfig;
use crate::page::dom;

/// Returns true if `node` is an in-site article link
pub fn is_admissible(node: &Node, link_prefix: &str) -> bool {
    let Some(element) = node.as_element() else {
        return false;
    };

    element.name() == "a"
        && element
            .attr("href")
            .is_some_and(|href| href.starts_with(link_prefix))
}

/// Collects the absolute URLs of all admissible links in `blocks`.
///
/// Blocks are walked in the given order and each block in document order.
/// Duplicates are kept; the index decides later whether a URL is new.
pub fn extract_links(blocks: &[ElementRef<'_>], site: &SiteConfig) -> Vec<String> {
    let mut links = Vec::new();

    for block in blocks {
        for node in dom::traverse(*block) {
            if !is_admissible(node, &site.link_prefix) {
                continue;
            }
            if let Some(href) = node.as_element().and_then(|el| el.attr("href")) {
                links.push(format!("{}{}", site.base_url, href));
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    // The element's own node is the first one a traversal yields
    fn node_of(element: ElementRef<'_>) -> &Node {
        dom::traverse(element).next().unwrap()
    }

    fn first_node<'a>(html: &'a Html, css: &str) -> &'a Node {
        let selector = Selector::parse(css).unwrap();
        node_of(html.select(&selector).next().unwrap())
    }

    fn paragraphs(html: &Html) -> Vec<ElementRef<'_>> {
        let selector = Selector::parse("p").unwrap();
        html.select(&selector).collect()
    }

    #[test]
    fn test_anchor_with_prefix_is_admissible() {
        let html = Html::parse_fragment("<a href='/wiki/Rust'>Rust</a>");
        assert!(is_admissible(first_node(&html, "a"), "/wiki/"));
    }

    #[test]
    fn test_external_anchor_is_rejected() {
        let html = Html::parse_fragment("<a href='https://example.com/wiki/Rust'>x</a>");
        assert!(!is_admissible(first_node(&html, "a"), "/wiki/"));
    }

    #[test]
    fn test_anchor_without_prefix_is_rejected() {
        let html = Html::parse_fragment("<a href='/w/index.php?title=Rust'>x</a>");
        assert!(!is_admissible(first_node(&html, "a"), "/wiki/"));
    }

    #[test]
    fn test_anchor_with_empty_or_missing_href_is_rejected() {
        let html = Html::parse_fragment("<a href=''>x</a><a name='top'>y</a>");
        let selector = Selector::parse("a").unwrap();
        for anchor in html.select(&selector) {
            assert!(!is_admissible(node_of(anchor), "/wiki/"));
        }
    }

    #[test]
    fn test_non_anchor_with_prefix_is_rejected() {
        let html = Html::parse_fragment("<link href='/wiki/Rust'><span href='/wiki/Rust'>x</span>");
        assert!(!is_admissible(first_node(&html, "link"), "/wiki/"));
        assert!(!is_admissible(first_node(&html, "span"), "/wiki/"));
    }

    #[test]
    fn test_text_node_is_rejected() {
        let html = Html::parse_fragment("<p>/wiki/Rust</p>");
        let block = paragraphs(&html)[0];
        let text = dom::traverse(block).nth(1).unwrap();
        assert!(text.is_text());
        assert!(!is_admissible(text, "/wiki/"));
    }

    #[test]
    fn test_extract_links_in_document_order_across_blocks() {
        let html = Html::parse_fragment(
            "<p>See <a href='/wiki/B'>B</a> and <b><a href='/wiki/C'>C</a></b>.</p>\
             <p><a href='https://other.org/wiki/X'>X</a> then <a href='/wiki/D'>D</a></p>",
        );
        let site = SiteConfig::default();

        let links = extract_links(&paragraphs(&html), &site);
        assert_eq!(
            links,
            vec![
                "https://en.wikipedia.org/wiki/B",
                "https://en.wikipedia.org/wiki/C",
                "https://en.wikipedia.org/wiki/D",
            ]
        );
    }

    #[test]
    fn test_extract_links_keeps_duplicates() {
        let html = Html::parse_fragment(
            "<p><a href='/wiki/B'>B</a> <a href='/wiki/B'>again</a></p><p><a href='/wiki/B'>B</a></p>",
        );
        let links = extract_links(&paragraphs(&html), &SiteConfig::default());
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|l| l == "https://en.wikipedia.org/wiki/B"));
    }

    #[test]
    fn test_extract_links_uses_configured_site() {
        let html = Html::parse_fragment("<p><a href='/docs/intro'>i</a><a href='/wiki/B'>b</a></p>");
        let site = SiteConfig {
            base_url: "http://localhost:8080".to_string(),
            link_prefix: "/docs/".to_string(),
            ..SiteConfig::default()
        };

        let links = extract_links(&paragraphs(&html), &site);
        assert_eq!(links, vec!["http://localhost:8080/docs/intro"]);
    }

    #[test]
    fn test_extract_links_from_no_blocks() {
        assert!(extract_links(&[], &SiteConfig::default()).is_empty());
    }
}
