//! Static HTTP fetcher for the results site.
//!
//! Plain GET with a bounded timeout and a browser-like User-Agent. Content
//! the site renders client-side is not visible to this fetcher, so some
//! pages yield fewer rows than a browser would show.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::PageFetcher;
use crate::config::FetchConfig;
use crate::types::ScoutError;

const FETCHER_NAME: &str = "http";

pub struct HttpPageFetcher {
    http: Client,
    config: FetchConfig,
}

impl HttpPageFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build page HTTP client")?;
        Ok(Self { http, config })
    }

    async fn get(&self, url: &str) -> Result<String, ScoutError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ScoutError::Fetch { url: url.to_string(), message: e.to_string() })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScoutError::Status { url: url.to_string(), status: status.as_u16() });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ScoutError::Fetch { url: url.to_string(), message: e.to_string() })?;

        debug!(url, bytes = body.len(), status = status.as_u16(), "Page fetched");
        Ok(body)
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScoutError> {
        let result = self.get(url).await;

        // Spaces out requests to the site, whatever the outcome.
        let pause = self.config.request_pause();
        if !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }

        result
    }

    fn name(&self) -> &str {
        FETCHER_NAME
    }
}
