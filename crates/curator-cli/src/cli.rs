//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Curator: consolidate package curations from independent sources
#[derive(Parser)]
#[command(name = "curator")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge curation files from left to right into one curation
    Merge {
        /// Curation files (JSON), earlier files take precedence for singular facts
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Write the merged curation to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
}
