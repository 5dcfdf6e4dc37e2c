// src/extract/record.rs - Per-detail-page field extraction
use super::{element_text, selectors};
use crate::models::{MosqueRecord, PrayerTimings};
use crate::times::parse_prayer_time;
use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html};
use tracing::warn;

/// Extracts one record from a detail page. Every field is best-effort: a
/// missing marker or a failed parse logs a warning and leaves that one field
/// empty, the siblings are still extracted. `reference` supplies the calendar
/// date the prayer instants land on.
pub fn extract_record(document: &Html, url: &str, reference: DateTime<Utc>) -> MosqueRecord {
    let mut record = MosqueRecord::stub(url);

    // First body-text block is the address, second the description.
    let body_text = selectors::body_text();
    let mut blocks = document.select(&body_text);
    record.address = blocks.next().map(element_text);
    record.description = blocks.next().map(element_text);
    if record.address.is_none() {
        warn!("{}: no body-text blocks found", url);
    }

    record.quick_facts = tag_list(document, selectors::QUICK_FACTS_TBODY_INDEX, "quick_facts", url);
    record.governance = tag_list(document, selectors::GOVERNANCE_TBODY_INDEX, "governance", url);

    // Time markers map positionally onto the six slots; extras are ignored,
    // missing ones stay None.
    let markers = selectors::time_markers();
    for (i, marker) in document
        .select(&markers)
        .take(PrayerTimings::SLOT_NAMES.len())
        .enumerate()
    {
        let raw = element_text(marker);
        match parse_prayer_time(&raw, reference) {
            Ok(instant) => record.prayer_timings.set_slot(i, instant),
            Err(e) => warn!(
                "{}: skipping {} time {:?}: {}",
                url,
                PrayerTimings::SLOT_NAMES[i],
                raw,
                e
            ),
        }
    }

    record
}

/// Normalized text of each direct child of the `tbody` at a fixed ordinal
/// position. The ordinal encodes the page template, so a missing or empty
/// table is treated as a per-field miss rather than extracting whatever
/// happens to sit at that position in a drifted layout.
fn tag_list(document: &Html, index: usize, field: &str, url: &str) -> Vec<String> {
    let tbodies = selectors::tbodies();
    let Some(tbody) = document.select(&tbodies).nth(index) else {
        warn!("{}: no tbody at position {} for {}", url, index, field);
        return Vec::new();
    };

    let children: Vec<ElementRef> = tbody.children().filter_map(ElementRef::wrap).collect();
    if children.is_empty() {
        warn!("{}: {} table at position {} is empty", url, field, index);
        return Vec::new();
    }

    children
        .into_iter()
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    const URL: &str = "https://directory.example/masjid/one";

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    /// Builds a detail page with the template's table-heavy shape: enough
    /// filler tables that the quick-facts and governance tbodies land at
    /// their fixed ordinal positions.
    fn detail_page(body_blocks: &[&str], facts: &[&str], board: &[&str], times: &[&str]) -> Html {
        let mut html = String::from("<html><body>");
        for block in body_blocks {
            html.push_str(&format!(r#"<div class="bodyLink">{block}</div>"#));
        }
        for i in 0..=selectors::GOVERNANCE_TBODY_INDEX {
            let rows: String = if i == selectors::QUICK_FACTS_TBODY_INDEX {
                facts.iter().map(|t| format!("<tr><td>{t}</td></tr>")).collect()
            } else if i == selectors::GOVERNANCE_TBODY_INDEX {
                board.iter().map(|t| format!("<tr><td>{t}</td></tr>")).collect()
            } else {
                String::from("<tr><td>filler</td></tr>")
            };
            html.push_str(&format!("<table><tbody>{rows}</tbody></table>"));
        }
        for time in times {
            html.push_str(&format!(r#"<span class="tinyLink">{time}</span>"#));
        }
        html.push_str("</body></html>");
        Html::parse_document(&html)
    }

    #[test]
    fn full_page_extracts_every_field() {
        let document = detail_page(
            &["123 Main Street", "A neighborhood masjid."],
            &["Parking", "Wheelchair access"],
            &["Board of trustees"],
            &[
                "05:30 (EST)",
                "06:45 (EST)",
                "13:15 (EST)",
                "17:00 (EST)",
                "20:10 (EST)",
                "21:30 (EST)",
            ],
        );
        let record = extract_record(&document, URL, reference());

        assert_eq!(record.url, URL);
        assert_eq!(record.address.as_deref(), Some("123 Main Street"));
        assert_eq!(record.description.as_deref(), Some("A neighborhood masjid."));
        assert_eq!(record.quick_facts, vec!["Parking", "Wheelchair access"]);
        assert_eq!(record.governance, vec!["Board of trustees"]);
        let fajr = record.prayer_timings.fajr.unwrap();
        assert_eq!((fajr.hour(), fajr.minute()), (10, 30));
        assert!(record.prayer_timings.isha.is_some());
    }

    #[test]
    fn missing_second_body_block_leaves_description_absent() {
        let document = detail_page(&["123 Main Street"], &[], &[], &[]);
        let record = extract_record(&document, URL, reference());

        assert_eq!(record.address.as_deref(), Some("123 Main Street"));
        assert!(record.description.is_none());
    }

    #[test]
    fn four_time_markers_leave_last_two_slots_absent() {
        let document = detail_page(
            &[],
            &[],
            &[],
            &["05:30 (EST)", "06:45 (EST)", "13:15 (EST)", "17:00 (EST)"],
        );
        let record = extract_record(&document, URL, reference());

        for i in 0..4 {
            assert!(record.prayer_timings.slot(i).is_some(), "slot {i}");
        }
        assert!(record.prayer_timings.maghrib.is_none());
        assert!(record.prayer_timings.isha.is_none());
    }

    #[test]
    fn unparseable_time_skips_only_that_slot() {
        let document = detail_page(&[], &[], &[], &["garbage", "06:45 (EST)"]);
        let record = extract_record(&document, URL, reference());

        assert!(record.prayer_timings.fajr.is_none());
        assert!(record.prayer_timings.sunrise.is_some());
    }

    #[test]
    fn page_without_expected_tables_yields_empty_tag_lists() {
        let document = Html::parse_document("<html><body><p>sparse page</p></body></html>");
        let record = extract_record(&document, URL, reference());

        assert!(record.quick_facts.is_empty());
        assert!(record.governance.is_empty());
    }
}
