// src/snapshot.rs
//! The immutable result of one scan and the read-only queries over it.

use crate::graph::DependencyGraph;
use crate::tree::FolderNode;
use crate::types::FileRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the scan root in [`Snapshot::folders`].
pub const ROOT_FOLDER: &str = ".";

/// Recursive totals for one folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderMetrics {
    pub path: String,
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub file_types: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    /// Root the scan was run against, as given by the caller.
    pub root: String,
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub total_lines_of_code: usize,
    /// Sorted by relative path.
    pub files: Vec<FileRecord>,
    /// Folder path (`"."` for the root) -> subtree totals.
    pub folders: BTreeMap<String, FolderMetrics>,
    /// Extension -> file count.
    pub file_type_distribution: BTreeMap<String, usize>,
    pub dependency_graph: DependencyGraph,
    pub architecture_violations: Vec<String>,
    pub unused_components: Vec<String>,
    pub tree: FolderNode,
}

impl Snapshot {
    /// Folder reached by following `segments` from the root.
    #[must_use]
    pub fn folder_at<S: AsRef<str>>(&self, segments: &[S]) -> Option<&FolderNode> {
        self.tree.navigate(segments)
    }

    /// Histogram entries by descending count, ties broken by extension.
    #[must_use]
    pub fn top_file_types(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .file_type_distribution
            .iter()
            .map(|(ext, count)| (ext.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    /// Unused components matching both filters; empty filters match all.
    ///
    /// `search` is a case-insensitive substring of the path, `extension`
    /// an exact suffix such as `.py`.
    #[must_use]
    pub fn filter_unused(&self, search: &str, extension: &str) -> Vec<&str> {
        let needle = search.to_lowercase();
        self.unused_components
            .iter()
            .filter(|path| needle.is_empty() || path.to_lowercase().contains(&needle))
            .filter(|path| extension.is_empty() || path.ends_with(extension))
            .map(String::as_str)
            .collect()
    }

    /// Sorted distinct extensions among unused components.
    #[must_use]
    pub fn unused_extensions(&self) -> Vec<String> {
        let mut exts: Vec<String> = self
            .unused_components
            .iter()
            .filter_map(|path| {
                let name = path.rsplit('/').next().unwrap_or(path);
                let ext = crate::types::extension_of(name);
                (ext != crate::types::NO_EXTENSION).then_some(ext)
            })
            .collect();
        exts.sort();
        exts.dedup();
        exts
    }

    /// Total size in MiB with two decimals, e.g. `"1.50"`.
    #[must_use]
    pub fn total_size_mb(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let mb = self.total_size_bytes as f64 / (1024.0 * 1024.0);
        format!("{mb:.2}")
    }

    /// Line total with thousands separators, e.g. `"12,345"`.
    #[must_use]
    pub fn total_lines_display(&self) -> String {
        group_thousands(self.total_lines_of_code)
    }
}

/// Per-folder subtree totals, including the root under `"."`.
#[must_use]
pub fn folder_metrics(files: &[FileRecord]) -> BTreeMap<String, FolderMetrics> {
    let mut folders: BTreeMap<String, FolderMetrics> = BTreeMap::new();

    for file in files {
        for folder in ancestors(&file.relative_path) {
            let entry = folders
                .entry(folder.to_string())
                .or_insert_with(|| FolderMetrics {
                    path: folder.to_string(),
                    ..FolderMetrics::default()
                });
            entry.total_files += 1;
            entry.total_size_bytes += file.size_bytes;
            *entry.file_types.entry(file.extension.clone()).or_insert(0) += 1;
        }
    }

    folders
}

// "a/b/c.py" -> [".", "a", "a/b"]
fn ancestors(path: &str) -> Vec<&str> {
    let mut out = vec![ROOT_FOLDER];
    for (idx, ch) in path.char_indices() {
        if ch == '/' {
            out.push(&path[..idx]);
        }
    }
    out
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
