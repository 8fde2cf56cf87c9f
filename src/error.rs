use thiserror::Error;

use crate::feed::FetchError;
use crate::parse::ParseError;

/// Unified error type for loading a feed.
///
/// Fatal stages carry the feed URL. Per-product problems never surface
/// here; they are reported as [`SkipReason`](crate::SkipReason)s.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to download JDK feed from {url}: {source}")]
    Fetch { url: String, source: FetchError },

    #[error("failed to decompress JDK feed from {url}: {source}")]
    Decompress { url: String, source: std::io::Error },

    #[error("failed to parse JDK feed from {url}: {source}")]
    Parse { url: String, source: ParseError },
}

impl CatalogError {
    /// Feed URL of the failed load.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            CatalogError::Fetch { url, .. }
            | CatalogError::Decompress { url, .. }
            | CatalogError::Parse { url, .. } => url,
        }
    }
}
