// src/pipeline.rs - Discovery -> per-page extraction -> collection
use crate::config::ScrapingConfig;
use crate::extract::{links, record};
use crate::fetch::PageFetcher;
use crate::models::{MosqueRecord, Result};
use chrono::Utc;
use scraper::Html;
use tracing::{error, info, warn};

pub struct Scraper {
    fetcher: Box<dyn PageFetcher>,
    config: ScrapingConfig,
}

impl Scraper {
    pub fn new(fetcher: Box<dyn PageFetcher>, config: ScrapingConfig) -> Self {
        Self { fetcher, config }
    }

    /// Runs the whole pipeline: fetch the index, discover detail links, then
    /// visit each page sequentially in discovery order.
    ///
    /// An unreachable index aborts the run with an empty result; that is the
    /// only fatal condition. Everything after link discovery is isolated per
    /// URL: a page that cannot be fetched or extracted still contributes its
    /// url-only record, and the crawl moves on.
    pub async fn run(&self) -> Result<Vec<MosqueRecord>> {
        let index_url = self.config.index_url();
        info!("Starting scrape of {}", index_url);

        let index_html = match self.fetcher.fetch(&index_url).await {
            Ok(html) => html,
            Err(e) => {
                error!("Failed to fetch index page {}: {}", index_url, e);
                return Ok(Vec::new());
            }
        };

        let urls = {
            let document = Html::parse_document(&index_html);
            links::discover_links(&document, &self.config.base_url)
        };
        info!("Discovered {} detail pages", urls.len());

        let scraped_at = Utc::now();
        let mut records = Vec::with_capacity(urls.len());
        for url in urls {
            let mut rec = MosqueRecord::stub(&url);
            match self.fetcher.fetch(&url).await {
                Ok(html) => {
                    let document = Html::parse_document(&html);
                    rec = record::extract_record(&document, &url, scraped_at);
                }
                Err(e) => {
                    warn!("Failed to fetch {}, keeping url-only record: {}", url, e);
                }
            }
            records.push(rec);
        }

        info!("Scrape complete: {} records", records.len());
        Ok(records)
    }
}
