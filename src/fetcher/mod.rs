//! HTTP retrieval of the target page and its subresources.
//!
//! One `Fetcher` (wrapping one `reqwest::Client`) is shared by every
//! request the service handles. Page fetch failures are fatal to a
//! harvest; subresource fetch failures are reported per-resource and
//! tallied by the orchestrator, never propagated as a job failure.

use std::time::Duration;

use anyhow::{Context, Result};
use futures::StreamExt;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::config::HarvestConfig;

/// Why a single fetch attempt failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered outside the 2xx range
    #[error("unexpected status {0}")]
    Status(u16),
    /// Connection, timeout, or body-read failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Body exceeded the configured size cap
    #[error("resource too large: {got} bytes exceeds limit of {limit} bytes")]
    TooLarge { got: usize, limit: usize },
}

/// A fetched page plus the URL it was actually served from.
///
/// `final_url` is the post-redirect location; subresource references
/// must resolve against it, not against the originally requested URL.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub final_url: Url,
    pub html: String,
}

/// Shared HTTP client for the harvest pipeline.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
    page_timeout: Duration,
    resource_timeout: Duration,
    max_resource_size: usize,
}

impl Fetcher {
    pub fn new(config: &HarvestConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            page_timeout: config.page_timeout,
            resource_timeout: config.resource_timeout,
            max_resource_size: config.max_resource_size,
        })
    }

    /// Fetch the target page, following redirects.
    pub async fn fetch_page(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .timeout(self.page_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let final_url = response.url().clone();
        let html = response.text().await?;

        Ok(FetchedPage { final_url, html })
    }

    /// Fetch one subresource, streaming the body under the size cap.
    ///
    /// The cap is checked against Content-Length before the download
    /// starts and again while streaming, since Content-Length is
    /// advisory.
    pub async fn fetch_resource(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .timeout(self.resource_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let expected = usize::try_from(response.content_length().unwrap_or(0)).unwrap_or(usize::MAX);
        if expected > self.max_resource_size {
            return Err(FetchError::TooLarge {
                got: expected,
                limit: self.max_resource_size,
            });
        }

        let mut buffer = Vec::with_capacity(expected.min(self.max_resource_size));
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            let new_total = buffer.len() + chunk.len();
            if new_total > self.max_resource_size {
                return Err(FetchError::TooLarge {
                    got: new_total,
                    limit: self.max_resource_size,
                });
            }
            buffer.extend_from_slice(&chunk);
        }

        Ok(buffer)
    }
}
