//! Shared configuration constants for sitezip
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Browser user agent sent with every outbound request
///
/// Some origins refuse requests with obviously synthetic agents, so a
/// current Chrome string is used instead of a custom product token.
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Default timeout for fetching the target page, in seconds
pub const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 15;

/// Default timeout for fetching a single subresource, in seconds
pub const DEFAULT_RESOURCE_TIMEOUT_SECS: u64 = 15;

/// Default maximum size for a single subresource download: 10 MiB
///
/// Enforced both from the Content-Length header and while streaming the
/// body, so a lying server cannot blow the cap.
pub const DEFAULT_MAX_RESOURCE_SIZE: usize = 10 * 1024 * 1024;

/// Default number of simultaneous subresource fetches
///
/// Conservative bound that avoids hammering the target server while
/// keeping the pipeline busy. Unbounded concurrency is a robustness
/// defect for this workload, not a throughput win.
pub const DEFAULT_FETCH_CONCURRENCY: usize = 6;

/// Default deflate level for archive entries (0 = store, 9 = maximum)
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 9;

/// Archive entry name for the harvested page itself
pub const PAGE_ENTRY_NAME: &str = "index.html";

/// Fallback leaf name when a URL path segment sanitizes to nothing
pub const FALLBACK_FILENAME: &str = "file";

/// Default listening port for the HTTP front-end
pub const DEFAULT_PORT: u16 = 4000;
