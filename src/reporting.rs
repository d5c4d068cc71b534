//! Console output formatting for snapshots.

use crate::snapshot::Snapshot;
use crate::tree::FolderNode;
use colored::Colorize;

/// Number of histogram rows shown in the summary.
const TOP_TYPES: usize = 10;

/// Prints the scan summary: totals, file types, violations, unused files.
pub fn print_summary(snapshot: &Snapshot) {
    println!();
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", " SCAN REPORT".bold());
    println!("{}", "─".repeat(60).dimmed());
    println!();

    println!("  {} {}", "Root:".white(), snapshot.root);
    println!("  {} {}", "Total Files:".white(), snapshot.total_files);
    println!("  {} {} MB", "Total Size:".white(), snapshot.total_size_mb());
    println!("  {} {}", "Lines of Code:".white(), snapshot.total_lines_display());
    println!(
        "  {} {} files, {} edges",
        "Import Graph:".white(),
        snapshot.dependency_graph.len(),
        snapshot.dependency_graph.edge_count()
    );

    print_file_types(snapshot);

    println!();
    print_violations(&snapshot.architecture_violations);
    println!();
    print_unused(&snapshot.unused_components.iter().map(String::as_str).collect::<Vec<_>>());

    println!();
    println!("{}", "─".repeat(60).dimmed());
}

fn print_file_types(snapshot: &Snapshot) {
    let top = snapshot.top_file_types(TOP_TYPES);
    if top.is_empty() {
        return;
    }
    println!();
    println!("{}", "  FILE TYPES".yellow().bold());
    for (ext, count) in top {
        println!("    {:>6} {}", count.to_string().cyan(), ext);
    }
}

/// Prints architecture violations, or a clean status line.
pub fn print_violations(violations: &[String]) {
    if violations.is_empty() {
        println!("  {} {}", "Architecture:".white(), "no violations".green());
        return;
    }
    println!(
        "{}",
        format!("  ARCHITECTURE VIOLATIONS ({})", violations.len())
            .red()
            .bold()
    );
    for v in violations {
        println!("    {} {v}", "✗".red());
    }
}

/// Prints unused components, or a clean status line.
pub fn print_unused(unused: &[&str]) {
    if unused.is_empty() {
        println!("  {} {}", "Unused:".white(), "none".green());
        return;
    }
    println!(
        "{}",
        format!("  UNUSED COMPONENTS ({})", unused.len()).yellow().bold()
    );
    for path in unused {
        println!("    {}", path.dimmed());
    }
}

/// Prints one folder level: child folders with counts, then files with lines.
pub fn print_folder(path: &[String], node: &FolderNode) {
    let location = if path.is_empty() {
        node.name.clone()
    } else {
        format!("root/{}", path.join("/"))
    };
    println!("{} ({} files)", location.bold(), node.file_count);

    for folder in &node.folders {
        println!("  {}/ {}", folder.name.blue().bold(), format!("({})", folder.file_count).dimmed());
    }
    for file in &node.files {
        println!("  {} {}", file.name, format!("{} lines", file.line_count).dimmed());
    }
}
