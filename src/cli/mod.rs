//! CLI argument parsing for medrec
//!
//! Global flags: --root, --config, --catalog, --similarity, --format,
//! --quiet, --verbose, --log-level, --log-json

pub mod format;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use medrec_core::format::OutputFormat;
use parse::{parse_format, parse_limit};

/// Medrec - find similar alternatives for a medicine
#[derive(Parser, Debug)]
#[command(name = "medrec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving medrec.toml and artifacts
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit config file path
    #[arg(long, global = true, env = "MEDREC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog artifact path (overrides config)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Similarity matrix artifact path (overrides config)
    #[arg(long, global = true)]
    pub similarity: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, medrec_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default medrec.toml into the root directory
    Init {
        /// Overwrite an existing medrec.toml
        #[arg(long)]
        force: bool,
    },

    /// List catalog items
    List {
        /// Only show items containing this text (case-insensitive)
        #[arg(long, short)]
        filter: Option<String>,
    },

    /// Recommend alternatives for a medicine
    Recommend {
        /// Exact medicine name as listed in the catalog
        name: String,

        /// Number of alternatives (defaults to the configured default_limit)
        #[arg(long, short = 'n', value_parser = parse_limit)]
        limit: Option<usize>,

        /// Show similarity scores (records output always includes them)
        #[arg(long)]
        scores: bool,

        /// Omit purchase links
        #[arg(long)]
        no_links: bool,
    },

    /// Load and validate the catalog and similarity artifacts
    Check,
}
