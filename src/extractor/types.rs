//! Descriptor types produced by resource extraction.

use url::Url;

/// Resource classes harvested from a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// `img[src]`
    Image,
    /// `link[rel="stylesheet"][href]`
    Stylesheet,
    /// `script[src]`
    Script,
}

impl ResourceKind {
    /// Every kind, in the order classes are scanned.
    pub const ALL: [Self; 3] = [Self::Image, Self::Stylesheet, Self::Script];

    /// Archive folder this class lands in.
    #[must_use]
    pub fn folder(self) -> &'static str {
        match self {
            Self::Image => "images",
            Self::Stylesheet => "css",
            Self::Script => "js",
        }
    }

    /// CSS selector matching candidate elements of this class.
    pub(crate) fn selector(self) -> &'static str {
        match self {
            Self::Image => "img[src]",
            Self::Stylesheet => r#"link[rel="stylesheet"][href]"#,
            Self::Script => "script[src]",
        }
    }

    /// Attribute carrying the resource reference.
    pub(crate) fn attr(self) -> &'static str {
        match self {
            Self::Image | Self::Script => "src",
            Self::Stylesheet => "href",
        }
    }
}

/// A resolved subresource and the archive path it will be stored under.
///
/// Descriptors are created during extraction, are immutable, and are
/// consumed exactly once by the fetch stage. Within one harvest the
/// `url` is unique across all descriptors, and so is `archive_path`.
#[derive(Debug, Clone)]
pub struct ResourceDescriptor {
    /// Absolute, post-resolution source URL
    pub url: Url,
    /// `{class}/{sanitized leaf}` path inside the archive
    pub archive_path: String,
    /// Element class that produced the first occurrence
    pub kind: ResourceKind,
}
