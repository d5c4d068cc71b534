// src/scan.rs
//! Scan orchestration: walk, graph, validate, detect, assemble.

use std::path::Path;
use std::time::Instant;

use chrono::Utc;

use crate::cancel::CancelToken;
use crate::config::Config;
use crate::discovery;
use crate::error::Result;
use crate::graph::{find_unused, validate_architecture, GraphBuilder, ResolverRegistry};
use crate::snapshot::{folder_metrics, Snapshot};
use crate::tree::build_tree;

/// Runs full scans with a fixed config and resolver set.
pub struct Scanner {
    config: Config,
    registry: ResolverRegistry,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Scanner {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: ResolverRegistry::default(),
        }
    }

    /// Replaces the resolver set (e.g. to add a language).
    #[must_use]
    pub fn with_registry(mut self, registry: ResolverRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scans `root` into a fresh [`Snapshot`].
    ///
    /// # Errors
    /// Returns `PathNotFound`/`NotADirectory` for an unusable root and
    /// `Cancelled` if `cancel` fires; nothing partial is returned.
    pub fn run(&self, root: &Path, cancel: &CancelToken) -> Result<Snapshot> {
        let start = Instant::now();
        log::info!("Scanning {}", root.display());

        let walked = discovery::discover(root, &self.config.scan, cancel)?;

        let graph = GraphBuilder::new(root, &self.registry)
            .parallel(self.config.scan.parallel)
            .build(&walked.files, cancel)?;
        cancel.checkpoint()?;

        let architecture_violations = validate_architecture(&graph, &self.config.architecture.rules);
        let unused_components = find_unused(&graph, &self.registry.langs());
        let tree = build_tree(&walked.files);
        let folders = folder_metrics(&walked.files);

        let counters = walked.counters;
        let snapshot = Snapshot {
            timestamp: Utc::now(),
            root: root.display().to_string(),
            total_files: counters.total_files,
            total_size_bytes: counters.total_size_bytes,
            total_lines_of_code: counters.total_lines_of_code,
            files: walked.files,
            folders,
            file_type_distribution: counters.file_types,
            dependency_graph: graph,
            architecture_violations,
            unused_components,
            tree,
        };

        log::info!(
            "Scan complete: {} files, {} analyzable, {} violations, {} unused in {}ms",
            snapshot.total_files,
            snapshot.dependency_graph.len(),
            snapshot.architecture_violations.len(),
            snapshot.unused_components.len(),
            start.elapsed().as_millis()
        );
        Ok(snapshot)
    }
}

/// Scans `root` with the config found there (`indu.toml`) or the defaults.
///
/// A project whose `indu.toml` cannot be used is still scanned, with the
/// default config.
///
/// # Errors
/// Returns `PathNotFound` if `root` does not exist and `NotADirectory` if
/// it is a file.
pub fn run_scan(root: &Path) -> Result<Snapshot> {
    discovery::ensure_root(root)?;
    let config = Config::load_from(root).unwrap_or_else(|e| {
        log::warn!("{e}; scanning with default config");
        Config::default()
    });
    Scanner::new(config).run(root, &CancelToken::new())
}
