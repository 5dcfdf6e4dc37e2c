// src/text.rs - Whitespace normalization for scraped text nodes
use regex::Regex;
use std::sync::LazyLock;

static MULTI_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Collapses scraped text into a single trimmed line.
///
/// Newlines and tabs are deleted outright, then any run of two or more
/// whitespace characters is removed entirely. Single spaces survive; runs
/// vanish. This matches the output of earlier runs of the scraper, so records
/// stay diffable against historical data, and is kept deliberately even though
/// collapsing to a single space would read more naturally.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| *c != '\n' && *c != '\t').collect();
    MULTI_WHITESPACE.replace_all(&stripped, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletes_newlines_and_tabs() {
        assert_eq!(normalize("a\n\tb"), "ab");
    }

    #[test]
    fn runs_of_spaces_vanish_entirely() {
        assert_eq!(normalize("a    b"), "ab");
        assert_eq!(normalize("a  b"), "ab");
    }

    #[test]
    fn single_spaces_survive() {
        assert_eq!(normalize("123 Main Street"), "123 Main Street");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(normalize("  hello "), "hello");
    }

    #[test]
    fn empty_in_empty_out() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\n\n\t"), "");
    }
}
