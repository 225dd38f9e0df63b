//! Command line argument parsing for the Wordwise CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Wordwise - spelling suggestions from a dictionary file
#[derive(Parser, Debug, Clone)]
#[command(name = "wordwise")]
#[command(about = "Rank dictionary words by similarity to a misspelled word")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordwiseArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordwiseArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest corrections for a word
    Suggest(SuggestArgs),

    /// Interactive suggestion loop
    Repl(ReplArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for the suggest command
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Path to the dictionary file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// The word to find suggestions for
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of suggestions to return
    #[arg(short, long, default_value = "10")]
    pub limit: usize,

    /// Score candidates in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the repl command
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Path to the dictionary file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Maximum number of suggestions to show per word
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the dictionary file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output format for CLI results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
