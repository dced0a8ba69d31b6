pub mod constants;
pub mod filename;
pub mod url_utils;

pub use constants::*;
pub use filename::{archive_name_for_host, filename_from_url, sanitize_leaf};
pub use url_utils::{is_http_url, resolve_url};
