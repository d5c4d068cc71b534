// tests/session_test.rs - Scan session lifecycle
use indu_core::cancel::CancelToken;
use indu_core::config::Config;
use indu_core::error::IndError;
use indu_core::graph::{ImportResolver, PythonImports, ResolverRegistry};
use indu_core::lang::Lang;
use indu_core::types::Outcome;
use indu_core::{ScanSession, Scanner};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;
use std::thread;
use tempfile::TempDir;

fn project() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::create_dir_all(d.path().join("pkg")).unwrap();
    fs::write(d.path().join("pkg/main.py"), "from .util import f\n").unwrap();
    fs::write(d.path().join("pkg/util.py"), "def f():\n    pass\n").unwrap();
    d
}

fn sequential() -> Config {
    let mut c = Config::new();
    c.scan.parallel = false;
    c
}

/// Python resolver that reports when it starts and waits to be released.
struct Gate {
    started: Mutex<Sender<()>>,
    release: Mutex<Receiver<()>>,
}

impl ImportResolver for Gate {
    fn lang(&self) -> Lang {
        Lang::Python
    }

    fn resolve(&self, source: &str, file: &Path, root: &Path) -> Outcome<BTreeSet<String>> {
        if let Ok(tx) = self.started.lock() {
            let _ = tx.send(());
        }
        if let Ok(rx) = self.release.lock() {
            let _ = rx.recv();
        }
        PythonImports.resolve(source, file, root)
    }
}

/// Python resolver that cancels the scan it runs in.
struct Canceller(CancelToken);

impl ImportResolver for Canceller {
    fn lang(&self) -> Lang {
        Lang::Python
    }

    fn resolve(&self, source: &str, file: &Path, root: &Path) -> Outcome<BTreeSet<String>> {
        self.0.cancel();
        PythonImports.resolve(source, file, root)
    }
}

#[test]
fn test_scan_publishes_snapshot() {
    let d = project();
    let session = ScanSession::default();
    assert!(session.latest().is_none());

    let snap = session.run_scan(d.path(), &CancelToken::new()).unwrap();
    assert_eq!(snap.total_files, 2);
    assert!(!session.is_scanning());

    let latest = session.latest().unwrap();
    assert_eq!(latest.timestamp, snap.timestamp);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_history_grows_and_clear_keeps_it() {
    let d = project();
    let session = ScanSession::default();
    session.run_scan(d.path(), &CancelToken::new()).unwrap();

    fs::write(d.path().join("pkg/extra.py"), "import os\n").unwrap();
    let second = session.run_scan(d.path(), &CancelToken::new()).unwrap();
    assert_eq!(second.total_files, 3);

    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].total_files, 2);
    assert_eq!(history[1].total_files, 3);

    session.clear();
    assert!(session.latest().is_none());
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_missing_root_leaves_session_untouched() {
    let d = project();
    let session = ScanSession::default();
    session.run_scan(d.path(), &CancelToken::new()).unwrap();

    let err = session
        .run_scan(&d.path().join("missing"), &CancelToken::new())
        .unwrap_err();
    assert!(matches!(err, IndError::PathNotFound { .. }));
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.latest().unwrap().total_files, 2);
    assert!(!session.is_scanning());
}

#[test]
fn test_concurrent_scan_is_rejected() {
    let d = project();
    fs::remove_file(d.path().join("pkg/util.py")).unwrap();

    let (started_tx, started_rx) = channel();
    let (release_tx, release_rx) = channel();
    let mut registry = ResolverRegistry::empty();
    registry.register(Box::new(Gate {
        started: Mutex::new(started_tx),
        release: Mutex::new(release_rx),
    }));
    let session = ScanSession::new(Scanner::new(sequential()).with_registry(registry));

    thread::scope(|s| {
        let first = s.spawn(|| session.run_scan(d.path(), &CancelToken::new()));

        started_rx.recv().unwrap();
        assert!(session.is_scanning());
        let err = session.run_scan(d.path(), &CancelToken::new()).unwrap_err();
        assert!(matches!(err, IndError::ScanInProgress));

        release_tx.send(()).unwrap();
        let snap = first.join().unwrap().unwrap();
        assert_eq!(snap.total_files, 1);
    });

    assert!(!session.is_scanning());
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_cancelled_before_start_publishes_nothing() {
    let d = project();
    let session = ScanSession::default();
    let cancel = CancelToken::new();
    cancel.cancel();

    let err = session.run_scan(d.path(), &cancel).unwrap_err();
    assert!(matches!(err, IndError::Cancelled));
    assert!(session.latest().is_none());
    assert!(session.history().is_empty());
    assert!(!session.is_scanning());
}

#[test]
fn test_cancelled_mid_scan_publishes_nothing() {
    let d = project();
    let cancel = CancelToken::new();
    let mut registry = ResolverRegistry::empty();
    registry.register(Box::new(Canceller(cancel.clone())));
    let session = ScanSession::new(Scanner::new(sequential()).with_registry(registry));

    let err = session.run_scan(d.path(), &cancel).unwrap_err();
    assert!(matches!(err, IndError::Cancelled));
    assert!(session.history().is_empty());

    // The session is usable again afterwards.
    let snap = session.run_scan(d.path(), &CancelToken::new()).unwrap();
    assert_eq!(snap.total_files, 2);
    assert_eq!(session.history().len(), 1);
}
