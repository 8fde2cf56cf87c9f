use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation canceled")]
pub struct Canceled;

/// Progress and cancellation channel handed to a [`FeedSource`](super::FeedSource).
pub trait ProgressIndicator {
    /// Returns `Err(Canceled)` once the caller asked to stop.
    ///
    /// # Errors
    ///
    /// Returns [`Canceled`] when the operation should stop.
    fn check_canceled(&self) -> Result<(), Canceled>;

    fn set_fraction(&self, _fraction: f64) {}

    fn set_text(&self, _text: &str) {}
}

/// Indicator that never cancels and ignores progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressIndicator for NoProgress {
    fn check_canceled(&self) -> Result<(), Canceled> {
        Ok(())
    }
}

/// Shared cancel switch; clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    canceled: Arc<AtomicBool>,
}

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }
}

impl ProgressIndicator for CancelFlag {
    fn check_canceled(&self) -> Result<(), Canceled> {
        if self.is_canceled() {
            Err(Canceled)
        } else {
            Ok(())
        }
    }
}
