// src/cancel.rs
//! Cooperative cancellation for long-running scans.

use crate::error::{IndError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag checked at every directory and file boundary.
///
/// Clones share the same flag, so the caller keeps one copy and hands
/// another to the scan.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Bails out with [`IndError::Cancelled`] once cancellation was requested.
    ///
    /// # Errors
    /// Returns `Cancelled` if [`CancelToken::cancel`] has been called.
    pub fn checkpoint(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(IndError::Cancelled);
        }
        Ok(())
    }
}
