// src/graph/resolver.rs
//! Module identifier <-> project path mapping.
//!
//! Both directions are purely lexical: nothing here touches the disk, so a
//! scan resolves the same way regardless of where the root is mounted.

use crate::lang::Lang;
use std::collections::BTreeSet;
use std::path::{Component, Path};

/// Directory segments of `file`'s parent, relative to `root`.
///
/// Files outside `root` keep their full parent path.
#[must_use]
pub fn package_dir(file: &Path, root: &Path) -> Vec<String> {
    let Some(parent) = file.parent() else {
        return Vec::new();
    };
    let rel = parent.strip_prefix(root).unwrap_or(parent);

    let mut segments: Vec<String> = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(s) => segments.push(s.to_string_lossy().into_owned()),
            Component::ParentDir => ascend(&mut segments),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    segments
}

/// Resolves `from <dots><module> import ...` to a root-relative dotted name.
///
/// `level` is the number of leading dots. Level 1 is the importing file's
/// own package; each extra dot ascends one directory. Ascending past the
/// root keeps `..` segments, so the result stays visibly outside the
/// project and never matches a scanned file.
#[must_use]
pub fn resolve_relative(package: &[String], level: usize, module: &str) -> String {
    let mut segments = package.to_vec();
    for _ in 1..level {
        ascend(&mut segments);
    }
    segments.extend(module.split('.').map(str::to_string));
    segments.join(".")
}

fn ascend(segments: &mut Vec<String>) {
    match segments.last() {
        Some(last) if last != ".." => {
            segments.pop();
        }
        _ => segments.push("..".to_string()),
    }
}

/// The two files a module identifier may name: the module file itself and
/// the package marker of a directory with that name.
///
/// This is a heuristic. It cannot tell a project module from a third-party
/// module that happens to share its path, and it knows nothing about
/// re-exports through package markers.
#[must_use]
pub fn module_candidates(module: &str, lang: Lang) -> [String; 2] {
    let base = module.replace('.', "/");
    [
        format!("{base}{}", lang.module_ext()),
        format!("{base}/{}", lang.package_marker()),
    ]
}

/// Candidates of `module` that are actually present in `known`.
#[must_use]
pub fn resolve_module<'a>(module: &str, lang: Lang, known: &BTreeSet<&'a str>) -> Vec<&'a str> {
    module_candidates(module, lang)
        .iter()
        .filter_map(|c| known.get(c.as_str()).copied())
        .collect()
}
