// src/main.rs
use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod export;
mod extract;
mod fetch;
mod models;
mod pipeline;
mod text;
mod times;

use config::{load_config, Config};
use fetch::HttpFetcher;
use models::{Result, ScrapeRun};
use pipeline::Scraper;
use url::Url;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("masjid_scraper={}", config.logging.level).parse()?),
        )
        .init();

    // Catch a bad base_url before the crawl starts instead of per request.
    Url::parse(&config.scraping.base_url)?;

    tokio::fs::create_dir_all(&config.output.directory).await?;

    let fetcher = HttpFetcher::new(
        &config.scraping.user_agent,
        config.scraping.request_timeout_seconds,
    )?;
    let scraper = Scraper::new(Box::new(fetcher), config.scraping.clone());
    let records = scraper.run().await?;

    let run = ScrapeRun {
        source: config.scraping.index_url(),
        scraped_at: Utc::now().to_rfc3339(),
        total_records: records.len(),
        records,
    };

    let json_path = format!("{}/{}", config.output.directory, config.output.json_filename);
    let csv_path = format!("{}/{}", config.output.directory, config.output.csv_filename);
    export::save_to_json(&run, &json_path, config.output.pretty_json).await?;
    export::save_to_csv(&run.records, &csv_path).await?;

    info!("Done: {} records exported", run.total_records);
    Ok(())
}
