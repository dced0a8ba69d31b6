//! URL resolution and validation helpers.
//!
//! These functions are pure and own no state; dedup of resolved URLs is
//! the extractor's job.

use url::Url;

/// Resolve a possibly-relative reference against a base URL.
///
/// Returns `None` when the reference is empty, cannot be joined against
/// the base, or resolves to a non-HTTP scheme (`data:`, `javascript:`,
/// `mailto:` references are common in the wild and are never harvested).
///
/// Resolving an already-absolute HTTP(S) URL yields that URL unchanged,
/// regardless of the base.
#[must_use]
pub fn resolve_url(base: &Url, reference: &str) -> Option<Url> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    let resolved = base.join(reference).ok()?;
    matches!(resolved.scheme(), "http" | "https").then_some(resolved)
}

/// Check if a string is a fetchable HTTP(S) URL
///
/// Used by the request boundary to reject targets before any network
/// access happens.
#[must_use]
pub fn is_http_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/blog/post").expect("valid base")
    }

    #[test]
    fn resolves_relative_references() {
        let resolved = resolve_url(&base(), "img/logo.png").expect("resolvable");
        assert_eq!(resolved.as_str(), "https://example.com/blog/img/logo.png");
    }

    #[test]
    fn resolves_root_relative_references() {
        let resolved = resolve_url(&base(), "/assets/app.js").expect("resolvable");
        assert_eq!(resolved.as_str(), "https://example.com/assets/app.js");
    }

    #[test]
    fn resolves_scheme_relative_references() {
        let resolved = resolve_url(&base(), "//cdn.example.net/style.css").expect("resolvable");
        assert_eq!(resolved.as_str(), "https://cdn.example.net/style.css");
    }

    #[test]
    fn absolute_input_is_idempotent() {
        let absolute = "https://other.test/a/b.png";
        let resolved = resolve_url(&base(), absolute).expect("resolvable");
        assert_eq!(resolved.as_str(), absolute);

        let again = resolve_url(&resolved.clone(), resolved.as_str()).expect("resolvable");
        assert_eq!(again, resolved);
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(resolve_url(&base(), "").is_none());
        assert!(resolve_url(&base(), "   ").is_none());
    }

    #[test]
    fn rejects_non_http_schemes() {
        assert!(resolve_url(&base(), "data:image/png;base64,AAAA").is_none());
        assert!(resolve_url(&base(), "javascript:void(0)").is_none());
        assert!(resolve_url(&base(), "mailto:someone@example.com").is_none());
    }

    #[test]
    fn validates_target_urls() {
        assert!(is_http_url("https://example.com"));
        assert!(is_http_url("http://example.com/page?q=1"));
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("example.com"));
        assert!(!is_http_url(""));
    }
}
