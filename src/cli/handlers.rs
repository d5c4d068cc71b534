// src/cli/handlers.rs
//! Handlers for the scan-backed commands.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cancel::CancelToken;
use crate::config::Config;
use crate::discovery::ensure_root;
use crate::exit::IndExit;
use crate::reporting;
use crate::scan::Scanner;
use crate::session::ScanSession;
use crate::snapshot::Snapshot;

fn scan(path: &Path) -> Result<Arc<Snapshot>> {
    ensure_root(path)?;
    let config = Config::load_from(path)?;
    let session = ScanSession::new(Scanner::new(config));
    let snapshot = session.run_scan(path, &CancelToken::new())?;
    Ok(snapshot)
}

/// Runs a scan and prints the summary (or the snapshot as JSON).
///
/// # Errors
/// Returns error if the scan or JSON serialization fails.
pub fn handle_scan(path: &Path, json: bool) -> Result<IndExit> {
    let snapshot = scan(path)?;
    if json {
        let out = serde_json::to_string_pretty(snapshot.as_ref())
            .context("Failed to serialize snapshot")?;
        println!("{out}");
    } else {
        reporting::print_summary(&snapshot);
    }
    Ok(IndExit::Success)
}

/// Prints one level of the folder tree.
///
/// # Errors
/// Returns error if the scan fails.
pub fn handle_tree(path: &Path, at: Option<&str>) -> Result<IndExit> {
    let snapshot = scan(path)?;
    let segments: Vec<String> = at
        .unwrap_or("")
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    let Some(node) = snapshot.folder_at(segments.as_slice()) else {
        eprintln!("{} no folder '{}'", "error:".red().bold(), segments.join("/"));
        return Ok(IndExit::InvalidInput);
    };
    reporting::print_folder(&segments, node);
    Ok(IndExit::Success)
}

/// Prints unused components passing both filters.
///
/// # Errors
/// Returns error if the scan fails.
pub fn handle_unused(path: &Path, search: &str, ext: &str) -> Result<IndExit> {
    let snapshot = scan(path)?;
    reporting::print_unused(&snapshot.filter_unused(search, ext));
    Ok(IndExit::Success)
}

/// Prints architecture violations; exits non-zero when there are any.
///
/// # Errors
/// Returns error if the scan fails.
pub fn handle_violations(path: &Path) -> Result<IndExit> {
    let snapshot = scan(path)?;
    reporting::print_violations(&snapshot.architecture_violations);
    if snapshot.architecture_violations.is_empty() {
        Ok(IndExit::Success)
    } else {
        Ok(IndExit::ViolationsFound)
    }
}

/// Prints the effective config as TOML.
///
/// # Errors
/// Returns error if the config is invalid or cannot be rendered.
pub fn handle_config(path: &Path) -> Result<IndExit> {
    ensure_root(path)?;
    let config = Config::load_from(path)?;
    print!("{}", config.to_toml().context("Failed to render config")?);
    Ok(IndExit::Success)
}
