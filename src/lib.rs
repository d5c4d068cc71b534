//! Codebase intelligence scanner.
//!
//! A scan walks a project directory, records per-file size and line
//! metrics, builds an import graph for analyzable sources (Python), checks
//! layering rules over that graph and reports files nothing imports. The
//! result is one immutable [`snapshot::Snapshot`].
//!
//! ```no_run
//! use std::path::Path;
//!
//! let snapshot = indu_core::run_scan(Path::new("."))?;
//! println!("{} files, {} unused", snapshot.total_files, snapshot.unused_components.len());
//! # Ok::<(), indu_core::error::IndError>(())
//! ```

pub mod cancel;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod graph;
pub mod lang;
pub mod reporting;
pub mod scan;
pub mod session;
pub mod snapshot;
pub mod tree;
pub mod types;

pub use scan::{run_scan, Scanner};
pub use session::ScanSession;
