//! A game shared between threads.

use super::chain::FrameChain;
use super::error::BowlingError;
use super::score::ScoreView;
use super::view::Scorecard;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, instrument, warn};

/// One game behind an exclusive lock.
///
/// Cloning shares the same game. Every throw takes the lock, so throws
/// from different threads are applied one at a time and each sees the
/// result of the one before.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    chain: Arc<Mutex<FrameChain>>,
}

impl SharedGame {
    /// Creates a shared game with frame 1 ready.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, FrameChain>, BowlingError> {
        self.chain.lock().map_err(|_| {
            warn!("Shared game lock poisoned");
            BowlingError::LockPoisoned
        })
    }

    /// Records one throw while holding the lock.
    #[instrument(skip(self))]
    pub fn record_throw(&self, count: i32) -> Result<(), BowlingError> {
        let mut chain = self.lock()?;
        chain.record_throw(count)?;
        debug!(throws = chain.throws().len(), "Shared throw recorded");
        Ok(())
    }

    /// Runs a read-only query against a consistent view of the game.
    pub fn read<R>(&self, query: impl FnOnce(&FrameChain) -> R) -> Result<R, BowlingError> {
        let chain = self.lock()?;
        Ok(query(&chain))
    }

    /// Current total score.
    pub fn total_score(&self) -> Result<ScoreView, BowlingError> {
        self.read(FrameChain::total_score)
    }

    /// True once frame 10 is finished.
    pub fn is_game_complete(&self) -> Result<bool, BowlingError> {
        self.read(FrameChain::is_game_complete)
    }

    /// Full scorecard.
    pub fn scorecard(&self) -> Result<Scorecard, BowlingError> {
        self.read(FrameChain::scorecard)
    }

    /// Copy of the game as it stands.
    pub fn snapshot(&self) -> Result<FrameChain, BowlingError> {
        self.read(FrameChain::clone)
    }
}

impl From<FrameChain> for SharedGame {
    fn from(chain: FrameChain) -> Self {
        Self {
            chain: Arc::new(Mutex::new(chain)),
        }
    }
}
