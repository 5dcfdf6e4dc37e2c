// src/extract/mod.rs
pub mod links;
pub mod record;
pub mod selectors;

use crate::text::normalize;
use scraper::ElementRef;

/// Concatenated, normalized text of an element's text nodes.
pub fn element_text(element: ElementRef) -> String {
    normalize(&element.text().collect::<String>())
}
