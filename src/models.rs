use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// One mosque listing, keyed by its detail-page URL. The record is created as
/// soon as its link is discovered; a failed extraction leaves everything but
/// `url` empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MosqueRecord {
    pub url: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub quick_facts: Vec<String>,
    pub governance: Vec<String>,
    pub prayer_timings: PrayerTimings,
}

impl MosqueRecord {
    pub fn stub(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            address: None,
            description: None,
            quick_facts: Vec::new(),
            governance: Vec::new(),
            prayer_timings: PrayerTimings::default(),
        }
    }
}

/// Six named time-of-day slots, each independently optional. Slots are filled
/// positionally from the page's time markers, in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrayerTimings {
    pub fajr: Option<DateTime<Utc>>,
    pub sunrise: Option<DateTime<Utc>>,
    pub dhur: Option<DateTime<Utc>>,
    pub asr: Option<DateTime<Utc>>,
    pub maghrib: Option<DateTime<Utc>>,
    pub isha: Option<DateTime<Utc>>,
}

impl PrayerTimings {
    pub const SLOT_NAMES: [&'static str; 6] = ["fajr", "sunrise", "dhur", "asr", "maghrib", "isha"];

    pub fn set_slot(&mut self, index: usize, value: DateTime<Utc>) {
        match index {
            0 => self.fajr = Some(value),
            1 => self.sunrise = Some(value),
            2 => self.dhur = Some(value),
            3 => self.asr = Some(value),
            4 => self.maghrib = Some(value),
            5 => self.isha = Some(value),
            _ => {}
        }
    }

    pub fn slot(&self, index: usize) -> Option<DateTime<Utc>> {
        match index {
            0 => self.fajr,
            1 => self.sunrise,
            2 => self.dhur,
            3 => self.asr,
            4 => self.maghrib,
            5 => self.isha,
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScrapeRun {
    pub source: String,
    pub scraped_at: String,
    pub total_records: usize,
    pub records: Vec<MosqueRecord>,
}
