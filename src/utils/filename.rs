//! Filesystem-safe names derived from URLs.
//!
//! Archive entry names come from untrusted markup, so every leaf passes
//! through `sanitize-filename` before it is used. The invariant: the
//! result is never empty and never contains a path separator.

use url::Url;

use crate::utils::constants::FALLBACK_FILENAME;

/// Sanitize one URL path segment into a safe leaf name
///
/// Strips characters that are illegal in file names (separators, control
/// characters, reserved device names). Input that is empty, or becomes
/// empty after stripping, falls back to `"file"`.
#[must_use]
pub fn sanitize_leaf(segment: &str) -> String {
    let cleaned = sanitize_filename::sanitize(segment);
    if cleaned.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        cleaned
    }
}

/// Derive a leaf name from the last non-empty path segment of a URL
#[must_use]
pub fn filename_from_url(url: &Url) -> String {
    let leaf = url
        .path_segments()
        .and_then(|mut segments| segments.rfind(|segment| !segment.is_empty()))
        .unwrap_or("");
    sanitize_leaf(leaf)
}

/// Suggested download name for the finished archive: `<host>.zip`
#[must_use]
pub fn archive_name_for_host(url: &Url) -> String {
    match url.host_str() {
        Some(host) => format!("{}.zip", sanitize_leaf(host)),
        None => "page.zip".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ordinary_names() {
        assert_eq!(sanitize_leaf("logo.png"), "logo.png");
        assert_eq!(sanitize_leaf("app.min.js"), "app.min.js");
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(sanitize_leaf(""), "file");
    }

    #[test]
    fn fully_stripped_input_falls_back() {
        let cleaned = sanitize_leaf("///");
        assert_eq!(cleaned, "file");
    }

    #[test]
    fn never_emits_separators() {
        for nasty in ["../../etc/passwd", "a/b\\c", "..\\..\\win.ini", ".."] {
            let cleaned = sanitize_leaf(nasty);
            assert!(!cleaned.is_empty(), "empty output for {nasty:?}");
            assert!(!cleaned.contains('/'), "separator in output for {nasty:?}");
            assert!(!cleaned.contains('\\'), "separator in output for {nasty:?}");
        }
    }

    #[test]
    fn takes_last_non_empty_segment() {
        let url = Url::parse("https://example.com/a/b/logo.png").expect("valid");
        assert_eq!(filename_from_url(&url), "logo.png");

        // Trailing slash: the empty final segment is skipped.
        let url = Url::parse("https://example.com/a/b/").expect("valid");
        assert_eq!(filename_from_url(&url), "b");
    }

    #[test]
    fn root_path_falls_back() {
        let url = Url::parse("https://example.com/").expect("valid");
        assert_eq!(filename_from_url(&url), "file");
    }

    #[test]
    fn archive_name_uses_host() {
        let url = Url::parse("https://www.example.com/some/page").expect("valid");
        assert_eq!(archive_name_for_host(&url), "www.example.com.zip");
    }
}
