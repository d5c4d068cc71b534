// src/graph/imports.rs
use crate::graph::resolver::{package_dir, resolve_relative};
use crate::lang::Lang;
use crate::types::Outcome;
use std::collections::BTreeSet;
use std::path::Path;
use tree_sitter::{Node, Parser};

/// Turns one source file into the set of modules it references.
///
/// Implementations must never panic or abort on bad input: a file that
/// cannot be parsed yields `Outcome::Partial` with an empty set.
pub trait ImportResolver: Send + Sync {
    fn lang(&self) -> Lang;

    /// # Arguments
    /// * `source` - Decoded file content.
    /// * `file` - Path of the file (under `root`).
    /// * `root` - Scan root, used to anchor relative imports.
    fn resolve(&self, source: &str, file: &Path, root: &Path) -> Outcome<BTreeSet<String>>;
}

/// Resolvers by language. A file is analyzable iff its extension has one.
pub struct ResolverRegistry {
    resolvers: Vec<Box<dyn ImportResolver>>,
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self {
            resolvers: vec![Box::new(PythonImports)],
        }
    }
}

impl ResolverRegistry {
    /// A registry without any resolver; nothing is analyzable.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    pub fn register(&mut self, resolver: Box<dyn ImportResolver>) {
        self.resolvers.retain(|r| r.lang() != resolver.lang());
        self.resolvers.push(resolver);
    }

    /// Resolver for a recorded extension such as `.py`.
    #[must_use]
    pub fn for_extension(&self, ext: &str) -> Option<&dyn ImportResolver> {
        let lang = Lang::from_ext(ext)?;
        self.resolvers
            .iter()
            .find(|r| r.lang() == lang)
            .map(|r| r.as_ref())
    }

    #[must_use]
    pub fn is_analyzable(&self, ext: &str) -> bool {
        self.for_extension(ext).is_some()
    }

    #[must_use]
    pub fn langs(&self) -> Vec<Lang> {
        self.resolvers.iter().map(|r| r.lang()).collect()
    }
}

/// Python `import` / `from ... import` extraction over a tree-sitter tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonImports;

impl ImportResolver for PythonImports {
    fn lang(&self) -> Lang {
        Lang::Python
    }

    fn resolve(&self, source: &str, file: &Path, root: &Path) -> Outcome<BTreeSet<String>> {
        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(Lang::Python.grammar()) {
            return Outcome::Skipped {
                reason: format!("python grammar unavailable: {e}"),
            };
        }

        let Some(tree) = parser.parse(source, None) else {
            return Outcome::Skipped {
                reason: "parser produced no tree".to_string(),
            };
        };

        let root_node = tree.root_node();
        if let Some(err) = first_error(root_node) {
            return Outcome::Partial {
                value: BTreeSet::new(),
                reason: format!("syntax error at line {}", err.start_position().row + 1),
            };
        }

        let package = package_dir(file, root);
        let mut imports = BTreeSet::new();
        collect(root_node, source.as_bytes(), &package, &mut imports);
        Outcome::Ok(imports)
    }
}

fn collect(root: Node, src: &[u8], package: &[String], out: &mut BTreeSet<String>) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node.kind() {
            "import_statement" => collect_plain(node, src, out),
            "import_from_statement" => collect_from(node, src, package, out),
            "future_import_statement" => {
                out.insert("__future__".to_string());
            }
            _ => {
                let mut cursor = node.walk();
                stack.extend(node.named_children(&mut cursor));
            }
        }
    }
}

// import a.b, c as d
fn collect_plain(node: Node, src: &[u8], out: &mut BTreeSet<String>) {
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        let dotted = match name.kind() {
            "aliased_import" => name.child_by_field_name("name"),
            "dotted_name" => Some(name),
            _ => None,
        };
        if let Some(module) = dotted.and_then(|n| dotted_text(n, src)) {
            out.insert(module);
        }
    }
}

// from a.b import c / from ..a import c
fn collect_from(node: Node, src: &[u8], package: &[String], out: &mut BTreeSet<String>) {
    let Some(module) = node.child_by_field_name("module_name") else {
        return;
    };

    match module.kind() {
        "dotted_name" => {
            if let Some(name) = dotted_text(module, src) {
                out.insert(name);
            }
        }
        "relative_import" => {
            if let Some(resolved) = relative_target(module, src, package) {
                out.insert(resolved);
            }
        }
        _ => {}
    }
}

// `from . import x` names no module and yields nothing.
fn relative_target(node: Node, src: &[u8], package: &[String]) -> Option<String> {
    let mut level = 0;
    let mut name = None;

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "import_prefix" => {
                level = child.utf8_text(src).ok()?.chars().filter(|&c| c == '.').count();
            }
            "dotted_name" => name = dotted_text(child, src),
            _ => {}
        }
    }

    let name = name?;
    if level == 0 {
        return Some(name);
    }
    Some(resolve_relative(package, level, &name))
}

fn dotted_text(node: Node, src: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    let parts: Vec<&str> = node
        .named_children(&mut cursor)
        .filter(|c| c.kind() == "identifier")
        .filter_map(|c| c.utf8_text(src).ok())
        .collect();

    if parts.is_empty() {
        return None;
    }
    Some(parts.join("."))
}

// Python 2 statements the grammar still accepts but the language rejects.
const LEGACY_STATEMENTS: &[&str] = &["print_statement", "exec_statement"];

fn first_error(root: Node) -> Option<Node> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() || LEGACY_STATEMENTS.contains(&node.kind()) {
            return Some(node);
        }
        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    root.has_error().then_some(root)
}
