//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sentiscope: compare hotels and restaurants by review sentiment
#[derive(Parser)]
#[command(name = "sentiscope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Review corpus file (JSON, CSV or TSV); defaults to the built-in demo data
    #[arg(long, global = true, env = "SENTISCOPE_CORPUS", value_name = "FILE")]
    pub corpus: Option<PathBuf>,

    /// Lexicon file (JSON with "positive" and "negative" lists)
    #[arg(long, global = true, env = "SENTISCOPE_LEXICON", value_name = "FILE")]
    pub lexicon: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List structures with review counts and average ratings
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a single piece of review text
    Score {
        /// Review text to score
        #[arg(value_name = "TEXT")]
        text: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show per-review ratings and the average for one structure
    Rate {
        /// Structure name
        #[arg(value_name = "STRUCTURE")]
        structure: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare two structures and report the winner
    Compare {
        /// First structure
        #[arg(value_name = "A")]
        left: String,

        /// Second structure
        #[arg(value_name = "B")]
        right: String,

        /// Include the per-review rating table
        #[arg(short, long)]
        detail: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
