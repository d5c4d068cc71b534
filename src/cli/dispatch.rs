//! Maps parsed subcommands to their handlers.

use super::args::Commands;
use super::handlers;
use crate::exit::IndExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<IndExit> {
    match command {
        Commands::Scan { path, json } => handlers::handle_scan(&path, json),
        Commands::Tree { path, at } => handlers::handle_tree(&path, at.as_deref()),
        Commands::Unused { path, search, ext } => handlers::handle_unused(&path, &search, &ext),
        Commands::Violations { path } => handlers::handle_violations(&path),
        Commands::Config { path } => handlers::handle_config(&path),
    }
}
