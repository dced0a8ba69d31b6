//! Harvest configuration with builder.

use std::time::Duration;

use anyhow::{Result, bail};

use crate::utils::constants::{
    DEFAULT_COMPRESSION_LEVEL, DEFAULT_FETCH_CONCURRENCY, DEFAULT_MAX_RESOURCE_SIZE,
    DEFAULT_PAGE_TIMEOUT_SECS, DEFAULT_RESOURCE_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Configuration for one harvester instance.
///
/// A single config is shared by every request the service handles;
/// per-request state lives in the harvest job, not here.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// User-Agent header sent with every outbound request
    pub user_agent: String,
    /// Timeout for fetching the target page
    pub page_timeout: Duration,
    /// Timeout for fetching a single subresource
    pub resource_timeout: Duration,
    /// Maximum size of a single subresource, in bytes
    pub max_resource_size: usize,
    /// Maximum number of simultaneous subresource fetches
    pub concurrency: usize,
    /// Compression for archive entries: 0 stores entries verbatim,
    /// 1-9 select increasing deflate effort (banded fast/normal/maximum)
    pub compression_level: u32,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_timeout: Duration::from_secs(DEFAULT_PAGE_TIMEOUT_SECS),
            resource_timeout: Duration::from_secs(DEFAULT_RESOURCE_TIMEOUT_SECS),
            max_resource_size: DEFAULT_MAX_RESOURCE_SIZE,
            concurrency: DEFAULT_FETCH_CONCURRENCY,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl HarvestConfig {
    pub fn builder() -> HarvestConfigBuilder {
        HarvestConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`HarvestConfig`]
#[derive(Debug, Clone)]
pub struct HarvestConfigBuilder {
    config: HarvestConfig,
}

impl HarvestConfigBuilder {
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn page_timeout(mut self, timeout: Duration) -> Self {
        self.config.page_timeout = timeout;
        self
    }

    pub fn resource_timeout(mut self, timeout: Duration) -> Self {
        self.config.resource_timeout = timeout;
        self
    }

    pub fn max_resource_size(mut self, bytes: usize) -> Self {
        self.config.max_resource_size = bytes;
        self
    }

    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    pub fn compression_level(mut self, level: u32) -> Self {
        self.config.compression_level = level;
        self
    }

    /// Validate and produce the final configuration.
    pub fn build(self) -> Result<HarvestConfig> {
        if self.config.concurrency == 0 {
            bail!("concurrency must be at least 1");
        }
        if self.config.compression_level > 9 {
            bail!(
                "compression level {} out of range (0-9)",
                self.config.compression_level
            );
        }
        if self.config.user_agent.is_empty() {
            bail!("user agent must not be empty");
        }
        Ok(self.config)
    }
}
