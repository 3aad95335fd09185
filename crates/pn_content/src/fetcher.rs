use async_trait::async_trait;
use pn_core::config::FetchConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use url::Url;

use crate::extract::extract_main_text;
use crate::{FetchError, Result};

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Full body text of the article published at `url`.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Downloads article pages over HTTP and caches the extracted text per URL.
pub struct HttpContentFetcher {
    client: reqwest::Client,
    cache: RwLock<HashMap<String, String>>,
}

impl HttpContentFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("ar,en-US;q=0.7,en;q=0.3"),
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            cache: RwLock::new(HashMap::new()),
        })
    }

    fn validate(url: &str) -> Result<Url> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(FetchError::InvalidUrl(format!(
                "{}: unsupported scheme {}",
                url, scheme
            ))),
        }
    }

    pub async fn cached(&self) -> usize {
        self.cache.read().await.len()
    }
}

#[async_trait]
impl ContentSource for HttpContentFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        if let Some(content) = self.cache.read().await.get(url) {
            debug!("Content cache hit for {}", url);
            return Ok(content.clone());
        }

        let target = Self::validate(url)?;
        let html = self
            .client
            .get(target)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let Some(content) = extract_main_text(&html) else {
            warn!("No article body found at {}", url);
            return Err(FetchError::NotFound);
        };

        self.cache
            .write()
            .await
            .insert(url.to_string(), content.clone());
        Ok(content)
    }
}
