use thiserror::Error;

use super::progress::{Canceled, ProgressIndicator};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Canceled(#[from] Canceled),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server responded with status {code}")]
    Status { code: u16 },

    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(String),
}

/// Produces the raw (possibly compressed) feed bytes for a URL.
pub trait FeedSource {
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure or cancellation.
    fn fetch(&self, url: &str, progress: &dyn ProgressIndicator) -> Result<Vec<u8>, FetchError>;
}

/// Serves the same bytes for every URL.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    bytes: Vec<u8>,
}

impl StaticSource {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl FeedSource for StaticSource {
    fn fetch(&self, _url: &str, progress: &dyn ProgressIndicator) -> Result<Vec<u8>, FetchError> {
        progress.check_canceled()?;
        progress.set_fraction(1.0);
        Ok(self.bytes.clone())
    }
}

/// Reads the URL as a local path; a `file://` prefix is stripped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl FeedSource for FileSource {
    fn fetch(&self, url: &str, progress: &dyn ProgressIndicator) -> Result<Vec<u8>, FetchError> {
        progress.check_canceled()?;
        let path = url.strip_prefix("file://").unwrap_or(url);
        progress.set_text(path);
        let bytes = std::fs::read(path)?;
        progress.set_fraction(1.0);
        Ok(bytes)
    }
}

#[cfg(feature = "http")]
pub use http::HttpSource;

#[cfg(feature = "http")]
mod http {
    use std::io::Read;
    use std::time::Duration;

    use tracing::debug;

    use super::{FeedSource, FetchError};
    use crate::feed::progress::ProgressIndicator;

    const CHUNK_SIZE: usize = 64 * 1024;
    /// Upper bound on the buffer reserved from `Content-Length`.
    const MAX_PREALLOC: u64 = 16 * 1024 * 1024;

    /// Blocking HTTP source; checks for cancellation between chunks.
    #[derive(Debug, Clone)]
    pub struct HttpSource {
        client: reqwest::blocking::Client,
    }

    impl HttpSource {
        /// # Errors
        ///
        /// Returns [`FetchError::Http`] if the client cannot be built.
        pub fn new(timeout: Duration) -> Result<Self, FetchError> {
            let client = reqwest::blocking::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| FetchError::Http(e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl FeedSource for HttpSource {
        fn fetch(&self, url: &str, progress: &dyn ProgressIndicator) -> Result<Vec<u8>, FetchError> {
            progress.check_canceled()?;
            progress.set_text(url);
            let mut response = self
                .client
                .get(url)
                .send()
                .map_err(|e| FetchError::Http(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    code: status.as_u16(),
                });
            }

            let total = response.content_length();
            debug!(url, ?total, "downloading JDK feed");

            let reserve = total.map_or(0, |t| t.min(MAX_PREALLOC) as usize);
            let mut bytes = Vec::with_capacity(reserve);
            let mut chunk = vec![0_u8; CHUNK_SIZE];
            loop {
                progress.check_canceled()?;
                let read = response.read(&mut chunk)?;
                if read == 0 {
                    break;
                }
                bytes.extend_from_slice(&chunk[..read]);
                if let Some(total) = total.filter(|t| *t > 0) {
                    progress.set_fraction(bytes.len() as f64 / total as f64);
                }
            }
            progress.set_fraction(1.0);
            Ok(bytes)
        }
    }
}
