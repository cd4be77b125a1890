//! Command-line interface for strictly_scorer.

use clap::{Parser, Subcommand};

/// Strictly Scorer - ten-pin bowling scorekeeper
#[derive(Parser, Debug)]
#[command(name = "strictly_scorer")]
#[command(about = "Score a ten-pin bowling game throw by throw", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the scorer configuration file
    #[arg(short, long, global = true, default_value = "strictly_scorer.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a list of throws and print the scorecard
    Score {
        /// Pins knocked down by each throw, in order
        #[arg(required = true, allow_negative_numbers = true)]
        throws: Vec<i32>,
    },

    /// Read throws from stdin, one per line, printing the scorecard after each
    Play,
}
