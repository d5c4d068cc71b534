// src/graph/layers.rs
//! Layering rules over the import graph.
//!
//! A rule forbids files whose path contains one of its source tokens from
//! referencing modules that contain one of its forbidden tokens. Matching
//! is plain substring containment on the path and module identifier.

use super::dependency::DependencyGraph;
use crate::config::LayerRule;

/// Checks every edge of `graph` against `rules`.
///
/// Messages come out in graph key order, then dependency order, then rule
/// order, so identical graphs always produce identical lists.
#[must_use]
pub fn validate_architecture(graph: &DependencyGraph, rules: &[LayerRule]) -> Vec<String> {
    let mut violations = Vec::new();

    for (file, deps) in graph.iter() {
        let applicable: Vec<&LayerRule> = rules.iter().filter(|r| is_source(r, file)).collect();
        if applicable.is_empty() {
            continue;
        }

        for dep in deps {
            for rule in &applicable {
                if is_forbidden(rule, dep) {
                    violations.push(render(rule, file, dep));
                }
            }
        }
    }

    violations
}

fn is_source(rule: &LayerRule, file: &str) -> bool {
    rule.source_tokens.iter().any(|t| file.contains(t.as_str()))
}

fn is_forbidden(rule: &LayerRule, dependency: &str) -> bool {
    rule.forbidden_tokens
        .iter()
        .any(|t| dependency.contains(t.as_str()))
}

/// Fills the `{file}` and `{dependency}` placeholders of a rule message.
///
/// Substituted text is never scanned again, so braces inside a path or
/// module name come out verbatim.
#[must_use]
pub fn render(rule: &LayerRule, file: &str, dependency: &str) -> String {
    let mut out = String::with_capacity(rule.message.len() + file.len() + dependency.len());
    let mut rest = rule.message.as_str();

    while let Some(idx) = rest.find('{') {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];
        if let Some(after) = tail.strip_prefix("{file}") {
            out.push_str(file);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{dependency}") {
            out.push_str(dependency);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
