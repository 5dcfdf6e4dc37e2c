// src/export.rs - JSON and CSV persistence for a finished scrape
use crate::models::{MosqueRecord, Result, ScrapeRun};
use std::fmt::Write as _;
use tracing::info;

const CSV_HEADER: &str =
    "URL,Description,Address,Quick Facts,Governance,Fajr,Sunrise,Dhur,Asr,Maghrib,Isha";

pub async fn save_to_json(run: &ScrapeRun, filename: &str, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(run)?
    } else {
        serde_json::to_string(run)?
    };
    tokio::fs::write(filename, json).await?;
    info!("Wrote {} records to {}", run.total_records, filename);
    Ok(())
}

pub async fn save_to_csv(records: &[MosqueRecord], filename: &str) -> Result<()> {
    let mut out = String::new();
    writeln!(out, "{}", CSV_HEADER)?;
    for record in records {
        writeln!(out, "{}", csv_row(record))?;
    }
    tokio::fs::write(filename, out).await?;
    info!("Wrote {} records to {}", records.len(), filename);
    Ok(())
}

fn csv_row(record: &MosqueRecord) -> String {
    let timings = &record.prayer_timings;
    let cells = [
        record.url.clone(),
        record.description.clone().unwrap_or_default(),
        record.address.clone().unwrap_or_default(),
        record.quick_facts.join(", "),
        record.governance.join(", "),
        timing_cell(timings.fajr),
        timing_cell(timings.sunrise),
        timing_cell(timings.dhur),
        timing_cell(timings.asr),
        timing_cell(timings.maghrib),
        timing_cell(timings.isha),
    ];
    cells.map(|cell| csv_escape(&cell)).join(",")
}

fn timing_cell(value: Option<chrono::DateTime<chrono::Utc>>) -> String {
    value.map(|t| t.to_rfc3339()).unwrap_or_default()
}

/// List cells are joined with ", ", so quoting is not optional here.
fn csv_escape(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MosqueRecord;

    #[test]
    fn url_only_stub_renders_empty_cells() {
        let record = MosqueRecord::stub("https://directory.example/masjid/one");
        assert_eq!(
            csv_row(&record),
            "https://directory.example/masjid/one,,,,,,,,,,"
        );
    }

    #[test]
    fn joined_list_cells_are_quoted() {
        let mut record = MosqueRecord::stub("https://directory.example/masjid/one");
        record.quick_facts = vec!["Parking".to_string(), "Wudu area".to_string()];
        let row = csv_row(&record);
        assert!(row.contains(r#""Parking, Wudu area""#), "{row}");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(csv_escape(r#"the "main" hall"#), r#""the ""main"" hall""#);
        assert_eq!(csv_escape("plain"), "plain");
    }
}
