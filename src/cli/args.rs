//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI parser.
#[derive(Parser)]
#[command(name = "idna-shorten")]
#[command(about = "Shorten strings by inverting Unicode IDNA compatibility mappings")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Shorten a target string
    Shorten {
        /// Target string to shorten
        target: String,

        /// Mapping table file (defaults to the cached table)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Serialized shortcut index to load instead of a table
        #[arg(short, long)]
        index: Option<PathBuf>,

        /// Index format (auto-detected if not specified)
        #[arg(short = 'f', long)]
        format: Option<IndexFormat>,

        /// Also print the percent-encoded result
        #[arg(short, long)]
        encoded: bool,

        /// Re-expand the result through the table and check it matches
        #[arg(long)]
        verify: bool,

        /// Print only the shortened string
        #[arg(short, long)]
        quiet: bool,
    },

    /// Display mapping table and shortcut index statistics
    Info {
        /// Mapping table file (defaults to the cached table)
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// Build a shortcut index from a mapping table and save it
    BuildIndex {
        /// Output index file
        output: PathBuf,

        /// Mapping table file (defaults to the cached table)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, default_value = "bincode")]
        format: IndexFormat,
    },

    /// Download the IDNA mapping table into the local cache
    #[cfg(feature = "fetch")]
    Fetch {
        /// Destination file (defaults to the cached table path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show or update user settings
    Settings {
        /// Set the default mapping table path
        #[arg(long)]
        set_table: Option<PathBuf>,

        /// Set the default serialized index path
        #[arg(long)]
        set_index: Option<PathBuf>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },

    /// Launch interactive REPL
    Repl {
        /// Mapping table file to load at startup
        #[arg(short, long)]
        table: Option<PathBuf>,
    },
}

/// Serialization formats for shortcut index files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Serialize, serde::Deserialize)]
pub enum IndexFormat {
    /// Plain text (one entry per line, tab-separated)
    Text,
    /// Bincode binary format
    Bincode,
    /// JSON format
    Json,
}

impl std::fmt::Display for IndexFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Bincode => write!(f, "bincode"),
            Self::Json => write!(f, "json"),
        }
    }
}
