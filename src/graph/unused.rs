// src/graph/unused.rs
//! Unused component detection.
//!
//! A file is unused when no edge anywhere in the graph resolves to it.
//! Package markers are never reported: importing the package imports them.

use std::collections::BTreeSet;

use super::dependency::DependencyGraph;
use super::resolver::resolve_module;
use crate::lang::Lang;

/// Analyzable files that no module reference resolves to, sorted by path.
///
/// Dependencies that match no scanned file (third-party modules) simply
/// mark nothing. A third-party name that collides with a project path
/// does mark that file, hiding it from the result.
#[must_use]
pub fn find_unused(graph: &DependencyGraph, langs: &[Lang]) -> Vec<String> {
    let known: BTreeSet<&str> = graph.files().collect();
    let referenced = referenced_files(graph, langs, &known);

    known
        .iter()
        .filter(|path| !referenced.contains(*path))
        .filter(|path| !is_package_marker(path, langs))
        .map(|path| (*path).to_string())
        .collect()
}

fn referenced_files<'a>(
    graph: &DependencyGraph,
    langs: &[Lang],
    known: &BTreeSet<&'a str>,
) -> BTreeSet<&'a str> {
    let mut referenced = BTreeSet::new();
    for (_, deps) in graph.iter() {
        for dep in deps {
            for lang in langs {
                referenced.extend(resolve_module(dep, *lang, known));
            }
        }
    }
    referenced
}

fn is_package_marker(path: &str, langs: &[Lang]) -> bool {
    let name = path.rsplit('/').next().unwrap_or(path);
    langs.iter().any(|l| l.package_marker() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(entries: &[(&str, &[&str])]) -> DependencyGraph {
        let mut g = DependencyGraph::new();
        for (file, deps) in entries {
            g.insert(*file, deps.iter().map(|d| (*d).to_string()).collect());
        }
        g
    }

    const PY: &[Lang] = &[Lang::Python];

    #[test]
    fn test_sibling_reference_is_used() {
        let g = graph(&[("a/main.py", &["a.util"]), ("a/util.py", &[])]);
        assert_eq!(find_unused(&g, PY), vec!["a/main.py"]);
    }

    #[test]
    fn test_package_reference_marks_marker() {
        let g = graph(&[
            ("main.py", &["pkg"]),
            ("pkg/__init__.py", &[]),
            ("pkg/core.py", &[]),
        ]);
        assert_eq!(find_unused(&g, PY), vec!["main.py", "pkg/core.py"]);
    }

    #[test]
    fn test_markers_never_reported() {
        let g = graph(&[("lonely/__init__.py", &[]), ("x.py", &["os"])]);
        assert_eq!(find_unused(&g, PY), vec!["x.py"]);
    }

    #[test]
    fn test_dangling_references_mark_nothing() {
        let g = graph(&[("a.py", &["numpy", "requests.adapters"]), ("b.py", &[])]);
        assert_eq!(find_unused(&g, PY), vec!["a.py", "b.py"]);
    }

    #[test]
    fn test_self_import_counts_as_reference() {
        let g = graph(&[("loop.py", &["loop"])]);
        assert!(find_unused(&g, PY).is_empty());
    }

    #[test]
    fn test_library_name_collision_hides_file() {
        // `import json` also matches a project-level json.py.
        let g = graph(&[("app.py", &["json"]), ("json.py", &[])]);
        assert_eq!(find_unused(&g, PY), vec!["app.py"]);
    }
}
