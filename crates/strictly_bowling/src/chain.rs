//! The ten-frame chain: throw routing and bonus lookahead.
//!
//! Frames live in a fixed array of ten slots. Slot `k + 1` is filled the
//! moment frame `k` finishes, so "the current frame" is an index and the
//! throws following any frame can be read by walking the later slots.
//!
//! Scores are never stored. Each query recomputes from the recorded throws,
//! which makes repeated queries agree and keeps unresolved bonuses visible
//! as [`ScoreView::Pending`] instead of zero.

use super::contracts::{Contract, ThrowContract};
use super::error::BowlingError;
use super::frame::{FRAME_COUNT, Frame, FrameNumber};
use super::pins::PinCount;
use super::score::{Score, ScoreView};
use super::view::{FrameSnapshot, Scorecard};
use tracing::{debug, info, instrument, warn};

/// A game in progress: ten frame slots and a cursor to the current frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameChain {
    pub(crate) frames: [Option<Frame>; FRAME_COUNT],
    pub(crate) cursor: usize,
}

impl FrameChain {
    /// Creates a game with frame 1 ready for its first throw.
    #[instrument]
    pub fn new() -> Self {
        let mut frames: [Option<Frame>; FRAME_COUNT] = std::array::from_fn(|_| None);
        frames[0] = Some(Frame::new(FrameNumber::FIRST));
        Self { frames, cursor: 0 }
    }

    /// Rebuilds a game from its throw history.
    ///
    /// Stops at the first rejected throw and returns its error.
    #[instrument]
    pub fn replay(counts: &[u8]) -> Result<Self, BowlingError> {
        let mut chain = Self::new();
        for (position, count) in counts.iter().enumerate() {
            chain.record_throw(i32::from(*count)).inspect_err(|e| {
                warn!(position, count, error = %e, "Replay stopped at rejected throw");
            })?;
        }
        Ok(chain)
    }

    /// Records one throw against the current frame.
    ///
    /// Fails with `GameAlreadyComplete` once frame 10 is finished and with
    /// `OutOfRange` above ten pins; frame-level errors pass through. A
    /// rejected throw leaves the chain unchanged.
    #[instrument(skip(self), fields(frame = self.cursor + 1))]
    pub fn record_throw(&mut self, count: i32) -> Result<(), BowlingError> {
        if self.is_game_complete() {
            warn!("Throw after the game completed");
            return Err(BowlingError::GameAlreadyComplete);
        }
        let pins = PinCount::try_from(count).inspect_err(|e| {
            warn!(error = %e, "Rejected pin count");
        })?;
        self.record_pins(pins)
    }

    /// Records an already validated pin count.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only; a failed postcondition
    ///   restores the chain to its state before the throw
    #[instrument(skip(self), fields(frame = self.cursor + 1))]
    pub fn record_pins(&mut self, pins: PinCount) -> Result<(), BowlingError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        ThrowContract::pre(self, &pins)?;

        let cursor = self.cursor;
        let frame = self
            .frames
            .get_mut(cursor)
            .and_then(Option::as_mut)
            .ok_or_else(|| {
                BowlingError::InvariantViolation(format!("No frame at cursor {}", cursor + 1))
            })?;

        frame.bowl(pins).inspect_err(|e| {
            warn!(error = %e, "Frame rejected throw");
        })?;

        if frame.is_finished() && !frame.number().is_final() {
            let next = frame.create_next()?;
            debug!(next = %next.number(), "Advancing cursor");
            self.frames[cursor + 1] = Some(next);
            self.cursor = cursor + 1;
        }

        #[cfg(debug_assertions)]
        if let Err(e) = ThrowContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        if self.is_game_complete() {
            info!(total = %self.total_score(), "Game complete");
        }
        Ok(())
    }

    /// True once frame 10 is finished.
    pub fn is_game_complete(&self) -> bool {
        self.frame(FrameNumber::FINAL)
            .is_some_and(Frame::is_finished)
    }

    /// The frame currently accepting throws (frame 10 once the game is over).
    pub fn current_frame(&self) -> FrameNumber {
        FrameNumber::from_index(self.cursor).unwrap_or(FrameNumber::FINAL)
    }

    /// Returns a frame if it has been reached.
    pub fn frame(&self, number: FrameNumber) -> Option<&Frame> {
        self.frames.get(number.index()).and_then(Option::as_ref)
    }

    /// Frames reached so far, in order.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().flatten()
    }

    /// The raw slots, including the ones not reached yet.
    pub fn slots(&self) -> &[Option<Frame>; FRAME_COUNT] {
        &self.frames
    }

    /// Zero-based index of the current frame slot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Every recorded throw, in chronological order.
    pub fn throws(&self) -> Vec<PinCount> {
        self.frames().flat_map(Frame::throws).collect()
    }

    /// Throws recorded after `number`, in chronological order.
    fn throws_after(&self, number: FrameNumber) -> impl Iterator<Item = PinCount> + '_ {
        self.frames
            .iter()
            .skip(number.index() + 1)
            .flatten()
            .flat_map(Frame::throws)
    }

    /// Score of one frame, including its bonus throws.
    ///
    /// A strike takes the next two throws and a spare the next one, in the
    /// order they were bowled and across frame boundaries. If those throws
    /// have not been bowled yet, or the frame itself is unfinished, the
    /// score is `Pending`.
    #[instrument(skip(self))]
    pub fn frame_score(&self, number: FrameNumber) -> ScoreView {
        let Some(frame) = self.frame(number) else {
            return ScoreView::Pending;
        };
        if !frame.is_finished() {
            return ScoreView::Pending;
        }

        let mut score = Score::from(frame.state());
        for pins in self.throws_after(number) {
            match score.add_bonus(pins) {
                Some(next) => score = next,
                None => break,
            }
        }

        debug!(
            total = score.total(),
            remaining_bonus = score.remaining_bonus(),
            "Resolved frame score"
        );
        score.view()
    }

    /// Score of the whole game, settled only when all ten frames are.
    #[instrument(skip(self))]
    pub fn total_score(&self) -> ScoreView {
        FrameNumber::all()
            .map(|number| self.frame_score(number).value())
            .try_fold(0u16, |total, value| value.map(|v| total + v))
            .map_or(ScoreView::Pending, ScoreView::Settled)
    }

    /// Provisional sum of frames 1 through `number`.
    ///
    /// Counts only the settled prefix: the sum stops at the first frame
    /// whose score is still pending.
    pub fn running_score_through(&self, number: FrameNumber) -> u16 {
        FrameNumber::all()
            .take_while(|n| *n <= number)
            .map_while(|n| self.frame_score(n).value())
            .sum()
    }

    /// Read-only projection of one frame.
    pub fn frame_snapshot(&self, number: FrameNumber) -> FrameSnapshot {
        match self.frame(number) {
            Some(frame) => FrameSnapshot::from(frame),
            None => FrameSnapshot::unplayed(number),
        }
    }

    /// All frames, their scores and the total in one serializable value.
    pub fn scorecard(&self) -> Scorecard {
        Scorecard::from(self)
    }
}

impl Default for FrameChain {
    fn default() -> Self {
        Self::new()
    }
}
