use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hush")]
#[command(about = "Flag sensitive values in JSON documents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "HUSH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Highlight sensitive values in files or directories
    Scan {
        /// Files or directories (directories are searched for *.json)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Exit with an error when anything is flagged
        #[arg(long)]
        check: bool,
    },

    /// Show inlay type hints for a JSON file
    Hints {
        file: PathBuf,

        /// First line (1-indexed)
        #[arg(long, default_value = "1")]
        start: usize,

        /// Last line (1-indexed, inclusive)
        #[arg(long)]
        end: Option<usize>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the hover for a position in a file
    Hover {
        file: PathBuf,

        /// Line (1-indexed)
        #[arg(long)]
        line: usize,

        /// Column (1-indexed)
        #[arg(long)]
        column: usize,
    },

    /// Re-highlight a file every time it changes
    Watch {
        file: PathBuf,

        /// Polling interval in milliseconds
        #[arg(long, default_value = "500")]
        interval_ms: u64,
    },

    /// Print the effective configuration
    Config {
        /// Print the config file path instead
        #[arg(long)]
        path: bool,
    },
}
