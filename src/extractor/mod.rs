//! Subresource discovery from fetched HTML.
//!
//! Parsing goes through `scraper` (html5ever underneath), so malformed
//! markup degrades to best-effort recovery instead of aborting the
//! harvest. Extraction scans class by class (images, then stylesheets,
//! then scripts), resolving every candidate reference against the
//! post-redirect base URL and deduplicating by resolved absolute URL.
//! The first occurrence wins, even when a later occurrence appears under
//! a different element class.

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;
use xxhash_rust::xxh3::xxh3_64;

use crate::utils::{filename_from_url, resolve_url};

mod types;

pub use types::{ResourceDescriptor, ResourceKind};

/// Extract the deduplicated, ordered subresource list from a page.
///
/// References that cannot be resolved to an absolute HTTP(S) URL are
/// skipped silently; a broken `src` attribute is not an error for the
/// harvest.
#[must_use]
pub fn extract_resources(html: &str, base_url: &Url) -> Vec<ResourceDescriptor> {
    let document = Html::parse_document(html);

    let mut seen_urls: HashSet<Url> = HashSet::new();
    let mut used_paths: HashSet<String> = HashSet::new();
    let mut descriptors = Vec::new();

    for kind in ResourceKind::ALL {
        // The selectors are static and known-good; a parse failure would
        // only mean this class yields nothing.
        let Ok(selector) = Selector::parse(kind.selector()) else {
            continue;
        };

        for element in document.select(&selector) {
            let Some(reference) = element.value().attr(kind.attr()) else {
                continue;
            };
            let Some(resolved) = resolve_url(base_url, reference) else {
                continue;
            };
            if !seen_urls.insert(resolved.clone()) {
                continue;
            }

            let leaf = filename_from_url(&resolved);
            let archive_path = unique_archive_path(kind.folder(), &leaf, &resolved, &mut used_paths);
            descriptors.push(ResourceDescriptor {
                url: resolved,
                archive_path,
                kind,
            });
        }
    }

    descriptors
}

/// Build `{folder}/{leaf}`, disambiguating sanitized-name collisions.
///
/// Two distinct URLs can sanitize to the same leaf (different query
/// strings, different hosts with the same path). Overwriting an entry
/// would silently drop data, so later collisions get a short hash of the
/// source URL spliced in before the extension: `logo.png` becomes
/// `logo-1a2b3c4d.png`.
fn unique_archive_path(
    folder: &str,
    leaf: &str,
    url: &Url,
    used_paths: &mut HashSet<String>,
) -> String {
    let candidate = format!("{folder}/{leaf}");
    if used_paths.insert(candidate.clone()) {
        return candidate;
    }

    let hash = xxh3_64(url.as_str().as_bytes()) as u32;
    let mut tag = format!("{hash:08x}");
    let mut bump = 0u32;
    loop {
        let tagged = match leaf.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => format!("{folder}/{stem}-{tag}.{ext}"),
            _ => format!("{folder}/{leaf}-{tag}"),
        };
        if used_paths.insert(tagged.clone()) {
            return tagged;
        }
        // Truncated hashes can collide too; fall back to a counter.
        bump += 1;
        tag = format!("{hash:08x}-{bump}");
    }
}
