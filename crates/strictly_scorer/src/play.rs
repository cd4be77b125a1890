//! Scoring sessions: a batch of throws, or throws read line by line.

use crate::config::{InvalidThrowPolicy, ScorerConfig};
use crate::report::{Rejection, write_json};
use anyhow::Context;
use std::io::{BufRead, Write};
use strictly_bowling::{FrameChain, Scorecard};
use tracing::{debug, info, instrument, warn};

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Frame 10 finished.
    Complete(Scorecard),
    /// Input ended before the game did.
    InputEnded(Scorecard),
    /// A rejected throw ended the session under the abort policy.
    Aborted {
        /// Scorecard as of the last accepted throw.
        scorecard: Scorecard,
        /// The rejected input.
        rejection: Rejection,
    },
}

impl PlayOutcome {
    /// Scorecard at the end of the session.
    pub fn scorecard(&self) -> &Scorecard {
        match self {
            PlayOutcome::Complete(card) | PlayOutcome::InputEnded(card) => card,
            PlayOutcome::Aborted { scorecard, .. } => scorecard,
        }
    }
}

/// Scores a complete list of throws and writes the scorecard.
///
/// The first rejected throw fails the whole run, naming its position.
#[instrument(skip(writer, config))]
pub fn score_throws<W: Write>(
    throws: &[i32],
    writer: &mut W,
    config: &ScorerConfig,
) -> anyhow::Result<Scorecard> {
    let mut chain = FrameChain::new();
    for (position, count) in throws.iter().enumerate() {
        chain
            .record_throw(*count)
            .with_context(|| format!("Throw {} ({}) rejected", position + 1, count))?;
    }

    let card = chain.scorecard();
    info!(total = %card.total, complete = card.complete, "Scored throws");
    write_json(writer, &card, *config.pretty())?;
    Ok(card)
}

/// Reads throws one per line, writing the scorecard after each accepted one.
///
/// Blank lines are skipped. Rejected input is reported as JSON and then
/// either skipped or ends the session, per the configured policy.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    config: &ScorerConfig,
) -> anyhow::Result<PlayOutcome> {
    let mut chain = FrameChain::new();

    for line in reader.lines() {
        let line = line.context("Failed to read throw")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let result = match input.parse::<i32>() {
            Ok(count) => chain
                .record_throw(count)
                .map_err(|e| Rejection::from_error(input, &e)),
            Err(_) => Err(Rejection::unparsable(input)),
        };

        match result {
            Ok(()) => {
                debug!(input, "Throw accepted");
                write_json(writer, &chain.scorecard(), *config.pretty())?;
                if chain.is_game_complete() {
                    return Ok(PlayOutcome::Complete(chain.scorecard()));
                }
            }
            Err(rejection) => {
                warn!(input, error = %rejection.error, "Throw rejected");
                write_json(writer, &rejection, *config.pretty())?;
                if *config.on_invalid_throw() == InvalidThrowPolicy::Abort {
                    return Ok(PlayOutcome::Aborted {
                        scorecard: chain.scorecard(),
                        rejection,
                    });
                }
            }
        }
    }

    info!("Input ended before the game completed");
    Ok(PlayOutcome::InputEnded(chain.scorecard()))
}
