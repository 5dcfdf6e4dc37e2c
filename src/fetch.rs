// src/fetch.rs - HTTP page fetching behind a trait so the pipeline is testable
use crate::models::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches one page and returns its raw HTML. Any transport or HTTP-status
    /// failure surfaces as an error; callers decide whether that is fatal.
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);

        Ok(html)
    }
}
