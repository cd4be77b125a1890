//! Strictly Scorer - Unified CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_scorer::{Cli, Command, PlayOutcome, ScorerConfig, play, score_throws};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ScorerConfig::load(&cli.config)?;
    initialize_tracing(&config);

    match cli.command {
        Command::Score { throws } => run_score(&throws, &config),
        Command::Play => run_play(&config),
    }
}

/// Score throws given on the command line
#[instrument(skip(config))]
fn run_score(throws: &[i32], config: &ScorerConfig) -> Result<()> {
    let mut stdout = io::stdout().lock();
    score_throws(throws, &mut stdout, config)?;
    Ok(())
}

/// Score throws read from stdin
#[instrument(skip(config))]
fn run_play(config: &ScorerConfig) -> Result<()> {
    info!(policy = %config.on_invalid_throw(), "Reading throws from stdin");
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match play(stdin, &mut stdout, config)? {
        PlayOutcome::Complete(card) => info!(total = %card.total, "Game complete"),
        PlayOutcome::InputEnded(card) => info!(running = card.running, "Game left unfinished"),
        PlayOutcome::Aborted { rejection, .. } => {
            anyhow::bail!("Session aborted: {}", rejection.error)
        }
    }
    Ok(())
}

/// Logs go to stderr so stdout carries only JSON.
fn initialize_tracing(config: &ScorerConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
