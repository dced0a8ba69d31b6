//! Harvest orchestration.
//!
//! Drives the whole pipeline for one request: validate the target,
//! fetch the page, extract subresource descriptors against the
//! post-redirect base URL, then stream `index.html` plus every
//! successfully fetched resource into the archive. Only validation and
//! the page fetch can fail the job; once the archive stream is handed
//! to the caller, fetch problems shrink the archive instead of failing
//! it.

use futures::StreamExt;
use tracing::{debug, info, warn};
use url::Url;

use crate::archive::ZipStreamer;
use crate::config::HarvestConfig;
use crate::extractor::{ResourceDescriptor, extract_resources};
use crate::fetcher::{FetchedPage, Fetcher};
use crate::utils::constants::PAGE_ENTRY_NAME;
use crate::utils::{archive_name_for_host, is_http_url};

mod types;

pub use types::{HarvestError, HarvestStream};

/// Entry point for the harvest pipeline, shared across requests.
///
/// Holds only immutable configuration and the HTTP client; all mutable
/// state (dedup set, descriptor list, archive handle) is owned by one
/// job and discarded when the request ends.
pub struct Harvester {
    config: HarvestConfig,
    fetcher: Fetcher,
}

impl Harvester {
    pub fn new(config: HarvestConfig) -> anyhow::Result<Self> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }

    /// Run one harvest.
    ///
    /// Validates the target and fetches the page before returning, so
    /// both fatal failure modes are reported before the caller commits
    /// response headers. The returned stream is fed by a spawned task;
    /// dropping it abandons in-flight fetches.
    pub async fn harvest(&self, target_url: &str) -> Result<HarvestStream, HarvestError> {
        if !is_http_url(target_url) {
            return Err(HarvestError::InvalidInput(target_url.to_string()));
        }
        // is_http_url already proved this parses
        let url = Url::parse(target_url)
            .map_err(|_| HarvestError::InvalidInput(target_url.to_string()))?;

        let page = self
            .fetcher
            .fetch_page(&url)
            .await
            .map_err(HarvestError::PageFetch)?;

        let descriptors = extract_resources(&page.html, &page.final_url);
        debug!(
            url = %page.final_url,
            resources = descriptors.len(),
            "page fetched, starting archive stream"
        );

        let filename = archive_name_for_host(&page.final_url);
        let (streamer, stream) = ZipStreamer::open(self.config.compression_level);

        let fetcher = self.fetcher.clone();
        let concurrency = self.config.concurrency;
        tokio::spawn(stream_entries(
            streamer,
            fetcher,
            page,
            descriptors,
            concurrency,
        ));

        Ok(HarvestStream { filename, stream })
    }
}

/// Background half of a harvest: feed the archive until done or until
/// the consumer goes away.
async fn stream_entries(
    mut streamer: ZipStreamer,
    fetcher: Fetcher,
    page: FetchedPage,
    descriptors: Vec<ResourceDescriptor>,
    concurrency: usize,
) {
    // The page itself is always the first entry, verbatim.
    if let Err(err) = streamer
        .append(PAGE_ENTRY_NAME.to_string(), page.html.as_bytes())
        .await
    {
        warn!(error = %err, "archive stream closed before the page entry was written");
        return;
    }

    let mut saved = 0usize;
    let mut skipped = 0usize;

    // Bounded concurrent fetches; entries are appended in completion
    // order. Each unique archive path is written exactly once and
    // index.html is already in place.
    let mut fetches = futures::stream::iter(descriptors.into_iter().map(|descriptor| {
        let fetcher = fetcher.clone();
        async move {
            let result = fetcher.fetch_resource(&descriptor.url).await;
            (descriptor, result)
        }
    }))
    .buffer_unordered(concurrency);

    while let Some((descriptor, result)) = fetches.next().await {
        match result {
            Ok(bytes) => {
                if let Err(err) = streamer.append(descriptor.archive_path, &bytes).await {
                    warn!(
                        error = %err,
                        "archive stream closed mid-harvest, abandoning remaining fetches"
                    );
                    return;
                }
                saved += 1;
            }
            Err(err) => {
                // Per-resource failures never abort the job.
                warn!(url = %descriptor.url, error = %err, "skipping resource");
                skipped += 1;
            }
        }
    }

    match streamer.finalize().await {
        Ok(()) => info!(url = %page.final_url, saved, skipped, "harvest complete"),
        Err(err) => warn!(error = %err, "failed to finalize archive"),
    }
}
