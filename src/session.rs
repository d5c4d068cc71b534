// src/session.rs
//! Scan session: owns the in-flight flag, the current snapshot and history.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cancel::CancelToken;
use crate::error::{IndError, Result};
use crate::scan::Scanner;
use crate::snapshot::Snapshot;

#[derive(Default)]
struct SessionState {
    latest: Option<Arc<Snapshot>>,
    history: Vec<Arc<Snapshot>>,
}

/// One scan at a time; completed snapshots are appended to history.
///
/// A request made while another scan is running is rejected with
/// [`IndError::ScanInProgress`] rather than queued.
pub struct ScanSession {
    scanner: Scanner,
    scanning: AtomicBool,
    state: Mutex<SessionState>,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new(Scanner::default())
    }
}

/// Clears the scanning flag when the scan ends, however it ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ScanSession {
    #[must_use]
    pub fn new(scanner: Scanner) -> Self {
        Self {
            scanner,
            scanning: AtomicBool::new(false),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Runs a scan and publishes it as the current snapshot.
    ///
    /// # Errors
    /// `ScanInProgress` if another scan is running; otherwise whatever the
    /// scan itself returns. Failed or cancelled scans publish nothing.
    pub fn run_scan(&self, root: &Path, cancel: &CancelToken) -> Result<Arc<Snapshot>> {
        if self
            .scanning
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("Rejected scan of {}: scan already running", root.display());
            return Err(IndError::ScanInProgress);
        }
        let _guard = InFlight(&self.scanning);

        let snapshot = Arc::new(self.scanner.run(root, cancel)?);

        let mut state = self.lock();
        state.history.push(Arc::clone(&snapshot));
        state.latest = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.scanning.load(Ordering::Acquire)
    }

    /// The most recent snapshot, unless cleared.
    #[must_use]
    pub fn latest(&self) -> Option<Arc<Snapshot>> {
        self.lock().latest.clone()
    }

    /// Every published snapshot, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<Arc<Snapshot>> {
        self.lock().history.clone()
    }

    /// Drops the current snapshot; history is kept.
    pub fn clear(&self) {
        self.lock().latest = None;
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
