use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scraping: ScrapingConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrapingConfig {
    /// Scheme + host of the directory site; discovered hrefs are appended to
    /// this verbatim (they are site-relative and start with `/`).
    pub base_url: String,
    /// Path of the regional index page the crawl starts from.
    pub index_path: String,
    pub user_agent: String,
    pub request_timeout_seconds: u64,
}

impl ScrapingConfig {
    pub fn index_url(&self) -> String {
        format!("{}{}", self.base_url, self.index_path)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
    pub pretty_json: bool,
    pub json_filename: String,
    pub csv_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraping: ScrapingConfig {
                base_url: "https://www.salatomatic.com".to_string(),
                index_path: "/sub/United-States/North-Carolina/5cCQ2hDbzW".to_string(),
                user_agent: "Mozilla/5.0 (compatible; MasjidScraper/0.1)".to_string(),
                request_timeout_seconds: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            output: OutputConfig {
                directory: "out".to_string(),
                pretty_json: true,
                json_filename: "mosques.json".to_string(),
                csv_filename: "mosques.csv".to_string(),
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
