//! Loading a feed: fetch, decompress (gzip or xz), parse, select.
//!
//! Fetch, decompress and parse failures abort the load and are reported
//! with the feed URL. Problems with single products only drop those
//! products (see [`SelectionReport`](crate::SelectionReport)).

mod progress;
mod source;

use std::io::{self, Read};

use flate2::read::GzDecoder;
use tracing::{info, warn};
use xz2::read::XzDecoder;

pub use progress::{CancelFlag, Canceled, NoProgress, ProgressIndicator};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{FeedSource, FetchError, FileSource, StaticSource};

use crate::parse::{parse_document, CatalogDocument};
use crate::select::select_report;
use crate::{CatalogError, FeedConfig, JdkItem};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const XZ_MAGIC: [u8; 6] = [0xfd, b'7', b'z', b'X', b'Z', 0x00];

/// Decode `bytes` if they start with the gzip or xz magic; otherwise return
/// them as is.
///
/// # Errors
///
/// Returns an I/O error for a corrupt or truncated stream.
pub fn decompress(bytes: Vec<u8>) -> io::Result<Vec<u8>> {
    let mut decoded = Vec::with_capacity(bytes.len() * 4);
    if bytes.starts_with(&GZIP_MAGIC) {
        GzDecoder::new(bytes.as_slice()).read_to_end(&mut decoded)?;
    } else if bytes.starts_with(&XZ_MAGIC) {
        XzDecoder::new(bytes.as_slice()).read_to_end(&mut decoded)?;
    } else {
        return Ok(bytes);
    }
    Ok(decoded)
}

/// Fetch, decompress and parse the feed named by `config`.
///
/// # Errors
///
/// Returns [`CatalogError`] carrying the failed stage and the feed URL.
pub fn fetch_document(
    source: &dyn FeedSource,
    config: &FeedConfig,
    progress: &dyn ProgressIndicator,
) -> Result<CatalogDocument, CatalogError> {
    let url = config.feed_url.as_str();

    let raw = source
        .fetch(url, progress)
        .map_err(|source| CatalogError::Fetch {
            url: url.to_owned(),
            source,
        })?;

    let bytes = decompress(raw).map_err(|source| CatalogError::Decompress {
        url: url.to_owned(),
        source,
    })?;

    parse_document(&bytes).map_err(|source| CatalogError::Parse {
        url: url.to_owned(),
        source,
    })
}

/// Load the feed and select the items for the configured platform.
///
/// Items come back in document order; sort them with
/// [`JdkItem::listing_order`] for display.
///
/// # Errors
///
/// See [`fetch_document`].
pub fn load_catalog(
    source: &dyn FeedSource,
    config: &FeedConfig,
    progress: &dyn ProgressIndicator,
) -> Result<Vec<JdkItem>, CatalogError> {
    let document = fetch_document(source, config, progress)?;
    let report = select_report(&document, &config.context());

    if report.items().is_empty() && !document.is_empty() {
        warn!(url = %config.feed_url, products = document.len(), "no JDK in the feed fits this platform");
    }
    info!(
        url = %config.feed_url,
        items = report.items().len(),
        skipped = report.skipped().len(),
        "loaded JDK feed"
    );
    Ok(report.into_items())
}
