//! CLI argument parsing for dotwalk
//!
//! One invocation runs one algorithm over one DOT file; there are no
//! subcommands. Global output flags: --format, --quiet, --verbose.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

/// Dotwalk - graph-algorithm walker with step-by-step DOT diagrams
#[derive(Parser, Debug)]
#[command(name = "dotwalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Graph-definition file, in DOT format
    pub dotfile: PathBuf,

    /// Algorithm to run
    #[arg(long, short = 'a', value_enum)]
    pub algorithm: Algorithm,

    /// Start vertex label (required by every algorithm except dfs and topo)
    #[arg(long, short = 's')]
    pub source: Option<String>,

    /// Write numbered per-step .dot diagrams with this filename prefix
    #[arg(long, short = 'p')]
    pub prefix: Option<String>,

    /// Generate uncolored, unannotated diagram templates
    #[arg(long, short = 'b')]
    pub blank: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Report per-step progress
    #[arg(long, short)]
    pub verbose: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Topo,
    DagShortestPath,
    DagLongestPath,
    Dijkstra,
    CriticalPath,
}

impl Algorithm {
    /// Whether the algorithm walks from a declared start vertex.
    pub fn needs_source(self) -> bool {
        !matches!(self, Algorithm::Dfs | Algorithm::Topo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
