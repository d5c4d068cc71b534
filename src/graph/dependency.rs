// src/graph/dependency.rs
//! The file -> referenced-modules mapping produced by a scan.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Analyzable file path -> sorted module identifiers it references.
///
/// Keys iterate in path order, which fixes the order of every analysis
/// built on top of the graph. Targets may dangle (third-party modules).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    edges: BTreeMap<String, Vec<String>>,
}

impl DependencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the references of one file, replacing any earlier entry.
    pub fn insert(&mut self, file: impl Into<String>, deps: BTreeSet<String>) {
        self.edges.insert(file.into(), deps.into_iter().collect());
    }

    #[must_use]
    pub fn dependencies(&self, file: &str) -> Option<&[String]> {
        self.edges.get(file).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, file: &str) -> bool {
        self.edges.contains_key(file)
    }

    /// The analyzable file universe, in path order.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Every file and every referenced module, sorted and de-duplicated.
    #[must_use]
    pub fn nodes(&self) -> Vec<String> {
        let mut nodes: BTreeSet<&str> = self.files().collect();
        for deps in self.edges.values() {
            nodes.extend(deps.iter().map(String::as_str));
        }
        nodes.into_iter().map(str::to_string).collect()
    }

    /// Sorted `(source, target)` pairs.
    #[must_use]
    pub fn edges(&self) -> Vec<(String, String)> {
        self.iter()
            .flat_map(|(src, deps)| deps.iter().map(move |d| (src.to_string(), d.clone())))
            .collect()
    }
}
