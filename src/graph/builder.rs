// src/graph/builder.rs
//! Graph construction: read every analyzable file and resolve its imports.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use rayon::prelude::*;

use super::dependency::DependencyGraph;
use super::imports::{ImportResolver, ResolverRegistry};
use crate::cancel::CancelToken;
use crate::error::Result;
use crate::types::{FileRecord, Outcome};

/// Builds a [`DependencyGraph`] from walker output.
pub struct GraphBuilder<'a> {
    root: &'a Path,
    registry: &'a ResolverRegistry,
    parallel: bool,
}

impl<'a> GraphBuilder<'a> {
    #[must_use]
    pub fn new(root: &'a Path, registry: &'a ResolverRegistry) -> Self {
        Self {
            root,
            registry,
            parallel: true,
        }
    }

    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Resolves imports for every analyzable file in `files`.
    ///
    /// Non-analyzable files are left out of the graph entirely. Unreadable
    /// or unparsable files get an empty entry.
    ///
    /// # Errors
    /// Returns `Cancelled` if the token fires between files.
    pub fn build(&self, files: &[FileRecord], cancel: &CancelToken) -> Result<DependencyGraph> {
        let jobs: Vec<(&FileRecord, &dyn ImportResolver)> = files
            .iter()
            .filter_map(|f| self.registry.for_extension(&f.extension).map(|r| (f, r)))
            .collect();

        let run = |job: &(&FileRecord, &dyn ImportResolver)| -> Result<(String, BTreeSet<String>)> {
            let (file, resolver) = *job;
            cancel.checkpoint()?;
            Ok((file.relative_path.clone(), self.extract(file, resolver)))
        };

        // Collecting into a BTreeMap-backed graph makes the result
        // independent of the order the pool finishes in.
        let entries: Vec<(String, BTreeSet<String>)> = if self.parallel {
            jobs.par_iter().map(run).collect::<Result<_>>()?
        } else {
            jobs.iter().map(run).collect::<Result<_>>()?
        };

        let mut graph = DependencyGraph::new();
        for (path, deps) in entries {
            graph.insert(path, deps);
        }
        Ok(graph)
    }

    fn extract(&self, file: &FileRecord, resolver: &dyn ImportResolver) -> BTreeSet<String> {
        let full_path = self.root.join(&file.relative_path);
        let content = match fs::read(&full_path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                log::warn!("Could not read {}: {e}", full_path.display());
                return BTreeSet::new();
            }
        };

        match resolver.resolve(&content, &full_path, self.root) {
            Outcome::Ok(deps) => {
                log::debug!("{}: {} imports", file.relative_path, deps.len());
                deps
            }
            Outcome::Partial { value, reason } => {
                log::warn!("Could not parse {}: {reason}", file.relative_path);
                value
            }
            Outcome::Skipped { reason } => {
                log::warn!("Skipped imports of {}: {reason}", file.relative_path);
                BTreeSet::new()
            }
        }
    }
}
