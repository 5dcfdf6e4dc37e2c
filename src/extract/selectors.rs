// src/extract/selectors.rs - Every structural assumption about the site, in one place
//
// The directory renders every page from the same table-heavy template, so
// extraction leans on two kinds of markers: CSS classes that tag a role
// (title block, body text, time link) and raw ordinal positions among all
// `tbody` elements on a detail page. The ordinals are an implicit schema --
// they hold only as long as the template does -- which is exactly why they
// live here as named constants instead of being scattered through the
// extraction code.
use scraper::Selector;

/// Index-page containers whose anchor descendants are detail-page links.
pub const TITLE_BLOCK_CLASS: &str = "titleBS";

/// Detail-page free-text blocks; the first holds the address, the second the
/// description.
pub const BODY_TEXT_CLASS: &str = "bodyLink";

/// Detail-page time markers, in document order fajr through isha.
pub const TIME_MARKER_CLASS: &str = "tinyLink";

/// 0-based position of the quick-facts table among all `tbody` elements on a
/// detail page (the 213th).
pub const QUICK_FACTS_TBODY_INDEX: usize = 212;

/// 0-based position of the governance table among all `tbody` elements.
pub const GOVERNANCE_TBODY_INDEX: usize = 214;

pub fn title_blocks() -> Selector {
    class_selector(TITLE_BLOCK_CLASS)
}

pub fn anchors() -> Selector {
    Selector::parse("a").unwrap()
}

pub fn body_text() -> Selector {
    class_selector(BODY_TEXT_CLASS)
}

pub fn time_markers() -> Selector {
    class_selector(TIME_MARKER_CLASS)
}

pub fn tbodies() -> Selector {
    Selector::parse("tbody").unwrap()
}

fn class_selector(class: &str) -> Selector {
    // Class names are compile-time constants, so parsing cannot fail.
    Selector::parse(&format!(".{}", class)).unwrap()
}
