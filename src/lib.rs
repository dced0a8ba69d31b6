pub mod archive;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod harvester;
pub mod server;
pub mod utils;

pub use archive::ZipStreamer;
pub use config::HarvestConfig;
pub use extractor::{ResourceDescriptor, ResourceKind, extract_resources};
pub use fetcher::{FetchError, FetchedPage, Fetcher};
pub use harvester::{HarvestError, HarvestStream, Harvester};
pub use utils::{archive_name_for_host, filename_from_url, is_http_url, resolve_url, sanitize_leaf};
