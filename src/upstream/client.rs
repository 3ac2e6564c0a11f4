use super::HadithSource;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// [`HadithSource`] backed by the public static JSON CDN
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "api.base_url cannot be used as a base: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Invalid API base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<Value> {
        debug!("Fetching: {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream(format!("HTTP {}: {}", status, url)));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl HadithSource for HttpSource {
    async fn fetch_section(&self, edition: &str, section: u32) -> Result<Value> {
        let file = format!("{}.json", section);
        let url = self.endpoint(&["editions", edition, "sections", &file])?;
        self.get_json(url).await
    }

    async fn fetch_hadith(&self, edition: &str, hadith_number: &str) -> Result<Value> {
        let file = format!("{}.json", hadith_number);
        let url = self.endpoint(&["editions", edition, &file])?;
        self.get_json(url).await
    }

    async fn fetch_editions(&self) -> Result<Value> {
        let url = self.endpoint(&["editions.json"])?;
        self.get_json(url).await
    }
}
