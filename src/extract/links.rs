// src/extract/links.rs - Detail-page link discovery from the regional index
use super::selectors;
use scraper::Html;
use tracing::debug;

/// Collects the detail-page URL behind every title block on the index page,
/// in document order.
///
/// The site emits site-relative hrefs starting with `/`, so resolution is
/// plain concatenation onto `base_url` rather than full URL-join semantics.
/// Duplicates are kept as-is; the caller sees exactly what the page links to.
pub fn discover_links(document: &Html, base_url: &str) -> Vec<String> {
    let title_blocks = selectors::title_blocks();
    let anchors = selectors::anchors();

    let mut urls = Vec::new();
    for block in document.select(&title_blocks) {
        for anchor in block.select(&anchors) {
            if let Some(href) = anchor.value().attr("href") {
                urls.push(format!("{}{}", base_url, href));
            }
        }
    }

    debug!("Discovered {} detail links", urls.len());
    urls
}
