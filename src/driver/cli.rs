//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

/// CSVファイルをBoxのフォルダにアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "boxsync")]
#[command(about = "Upload CSV files to a Box folder", long_about = None)]
pub struct Args {
    /// .env path (default: auto-detect)
    #[arg(long)]
    pub env_file: Option<String>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Upload CSV files to Box
    Upload {
        /// Limit number of files
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List CSV files and upload status
    List {
        /// Target directory (default: LOCAL_DATA_DIR)
        #[arg(long)]
        dir: Option<String>,
    },

    /// Generate dummy CSV files
    MakeDummy {
        /// Rows per file
        #[arg(long, default_value_t = 5)]
        rows: usize,

        /// Number of files
        #[arg(long, default_value_t = 3)]
        files: usize,

        /// Destination directory (default: LOCAL_DATA_DIR)
        #[arg(long)]
        dir: Option<String>,
    },
}
