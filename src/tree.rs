// src/tree.rs
//! Folder/file tree used for navigating a snapshot.

use crate::types::FileRecord;
use serde::{Deserialize, Serialize};

/// Name of the tree's root node.
pub const ROOT_NAME: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLeaf {
    pub name: String,
    pub line_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    pub name: String,
    /// Child folders in first-seen order.
    pub folders: Vec<FolderNode>,
    /// Files directly in this folder, in input order.
    pub files: Vec<FileLeaf>,
    /// Files in the whole subtree.
    pub file_count: usize,
}

impl FolderNode {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            folders: Vec::new(),
            files: Vec::new(),
            file_count: 0,
        }
    }

    /// An empty root node.
    #[must_use]
    pub fn root() -> Self {
        Self::new(ROOT_NAME)
    }

    #[must_use]
    pub fn folder(&self, name: &str) -> Option<&FolderNode> {
        self.folders.iter().find(|f| f.name == name)
    }

    fn folder_mut_or_insert(&mut self, name: &str) -> &mut FolderNode {
        let idx = match self.folders.iter().position(|f| f.name == name) {
            Some(idx) => idx,
            None => {
                self.folders.push(FolderNode::new(name));
                self.folders.len() - 1
            }
        };
        &mut self.folders[idx]
    }

    /// Follows `segments` down from this node.
    ///
    /// Returns `None` as soon as a segment names no child folder.
    #[must_use]
    pub fn navigate<S: AsRef<str>>(&self, segments: &[S]) -> Option<&FolderNode> {
        let mut node = self;
        for segment in segments {
            node = node.folder(segment.as_ref())?;
        }
        Some(node)
    }

    /// Recomputes `file_count` for this node and every descendant.
    pub fn recount(&mut self) -> usize {
        let nested: usize = self.folders.iter_mut().map(FolderNode::recount).sum();
        self.file_count = self.files.len() + nested;
        self.file_count
    }

    /// Total number of file leaves below this node, counted directly.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.files.len() + self.folders.iter().map(FolderNode::leaf_count).sum::<usize>()
    }
}

/// Builds the folder tree for `files`.
#[must_use]
pub fn build_tree(files: &[FileRecord]) -> FolderNode {
    let mut root = FolderNode::root();

    for file in files {
        let mut segments: Vec<&str> = file.relative_path.split('/').collect();
        let Some(name) = segments.pop() else {
            continue;
        };

        let mut node = &mut root;
        for segment in segments {
            node = node.folder_mut_or_insert(segment);
        }
        node.files.push(FileLeaf {
            name: name.to_string(),
            line_count: file.line_count,
        });
    }

    root.recount();
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReadQuality;

    fn files(paths: &[&str]) -> Vec<FileRecord> {
        paths
            .iter()
            .map(|p| FileRecord {
                relative_path: (*p).to_string(),
                size_bytes: 1,
                line_count: 10,
                extension: ".py".to_string(),
                quality: ReadQuality::Clean,
            })
            .collect()
    }

    #[test]
    fn test_recursive_counts() {
        let tree = build_tree(&files(&["x.py", "sub/y.py", "sub/sub2/z.py"]));
        assert_eq!(tree.name, "root");
        assert_eq!(tree.file_count, 3);
        assert_eq!(tree.files.len(), 1);

        let sub = tree.navigate(&["sub"]).unwrap();
        assert_eq!(sub.file_count, 2);
        let sub2 = tree.navigate(&["sub", "sub2"]).unwrap();
        assert_eq!(sub2.file_count, 1);
        assert_eq!(sub2.files[0].name, "z.py");
        assert_eq!(sub2.files[0].line_count, 10);
    }

    #[test]
    fn test_empty_input() {
        let tree = build_tree(&[]);
        assert_eq!(tree.file_count, 0);
        assert!(tree.folders.is_empty());
    }

    #[test]
    fn test_navigate_missing_segment() {
        let tree = build_tree(&files(&["a/b.py"]));
        assert!(tree.navigate(&["a", "nope"]).is_none());
        let empty: [&str; 0] = [];
        assert_eq!(tree.navigate(&empty).unwrap().name, "root");
    }

    #[test]
    fn test_count_invariant() {
        let tree = build_tree(&files(&[
            "a/1.py", "a/2.py", "a/b/3.py", "c/4.py", "5.py", "a/b/c/d/6.py",
        ]));
        assert_eq!(tree.leaf_count(), 6);
        assert_eq!(tree.file_count, 6);
        fn check(node: &FolderNode) {
            let children: usize = node.folders.iter().map(|f| f.file_count).sum();
            assert_eq!(node.file_count, node.files.len() + children);
            node.folders.iter().for_each(check);
        }
        check(&tree);
    }

    #[test]
    fn test_folders_keep_first_seen_order() {
        let tree = build_tree(&files(&["b/x.py", "a/y.py", "b/z.py"]));
        let names: Vec<_> = tree.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(tree.folder("b").unwrap().files.len(), 2);
    }
}
