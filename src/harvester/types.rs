//! Harvest error taxonomy and job output.

use thiserror::Error;
use tokio::io::DuplexStream;
use tokio_util::io::ReaderStream;

use crate::fetcher::FetchError;

/// Failures that surface to the HTTP caller.
///
/// Everything else (unresolvable references, individual subresource
/// fetch failures) degrades the archive instead of failing the job.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Target URL missing or not HTTP(S). Reported before any network
    /// access happens.
    #[error("invalid target URL: {0:?}")]
    InvalidInput(String),
    /// The target page itself could not be retrieved. Fatal to the job,
    /// reported before any output bytes are sent.
    #[error("failed to fetch page: {0}")]
    PageFetch(#[source] FetchError),
}

/// A started harvest: the suggested download name plus the archive byte
/// stream.
///
/// By the time a caller holds one of these, the page has been fetched
/// and its resources extracted; response headers can be committed. All
/// remaining work happens in a background task feeding the stream, and
/// dropping the stream cancels it.
#[derive(Debug)]
pub struct HarvestStream {
    /// `<sanitized-host>.zip`, derived from the post-redirect base URL
    pub filename: String,
    /// Compressed archive bytes, produced incrementally
    pub stream: ReaderStream<DuplexStream>,
}
