use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "indu", version, about = "Codebase intelligence scanner")]
pub struct Cli {
    /// Log progress (info level) to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a project and print the summary report
    Scan {
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
        /// Print the full snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse the folder tree of a project
    Tree {
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
        /// Folder to show, as a slash-separated path below the root
        #[arg(long, value_name = "FOLDER")]
        at: Option<String>,
    },
    /// List files no other module imports
    Unused {
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
        /// Case-insensitive substring the path must contain
        #[arg(long, short, default_value = "")]
        search: String,
        /// Extension the path must end with, e.g. `.py`
        #[arg(long, short, default_value = "")]
        ext: String,
    },
    /// List architecture rule violations
    Violations {
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
    },
    /// Print the effective configuration for a project
    Config {
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
    },
}
