//! Strictly Scorer - command-line host for the strictly_bowling engine
//!
//! Collects throws from arguments or standard input, feeds them to a
//! [`strictly_bowling::FrameChain`] and prints scorecards as JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;
mod report;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, InvalidThrowPolicy, ScorerConfig};

// Crate-level exports - Sessions
pub use play::{PlayOutcome, play, score_throws};
pub use report::{Rejection, write_json};
