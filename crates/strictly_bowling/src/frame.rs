//! Frame slots and frame numbering.

use super::error::BowlingError;
use super::pins::PinCount;
use super::state::FrameState;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Frames in a game.
pub const FRAME_COUNT: usize = 10;

/// Position of a frame in the game (1-10).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
#[display("{}", _0)]
pub struct FrameNumber(u8);

impl FrameNumber {
    /// The opening frame.
    pub const FIRST: FrameNumber = FrameNumber(1);

    /// The tenth frame.
    pub const FINAL: FrameNumber = FrameNumber(FRAME_COUNT as u8);

    /// Creates a frame number, failing outside 1-10.
    #[instrument]
    pub fn new(number: i32) -> Result<Self, BowlingError> {
        u8::try_from(number)
            .ok()
            .filter(|n| (1..=FRAME_COUNT as u8).contains(n))
            .map(FrameNumber)
            .ok_or(BowlingError::InvalidFrameNumber(number))
    }

    /// Creates a frame number from a zero-based slot index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < FRAME_COUNT).then(|| FrameNumber(index as u8 + 1))
    }

    /// Zero-based slot index.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// The number as an integer.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The following frame, if any.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// True for frame 10.
    pub fn is_final(self) -> bool {
        self == Self::FINAL
    }

    /// Kind of frame played at this position.
    pub fn kind(self) -> FrameKind {
        if self.is_final() {
            FrameKind::Final
        } else {
            FrameKind::Normal
        }
    }

    /// All ten frame numbers, in order.
    pub fn all() -> impl Iterator<Item = FrameNumber> {
        (0..FRAME_COUNT).filter_map(Self::from_index)
    }
}

impl TryFrom<u8> for FrameNumber {
    type Error = BowlingError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(number))
    }
}

impl From<FrameNumber> for u8 {
    fn from(frame: FrameNumber) -> Self {
        frame.0
    }
}

/// Which rule set a frame follows.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FrameKind {
    /// Frames 1-9: up to two throws, bonuses borrowed from later throws.
    Normal,
    /// Frame 10: up to three throws, bonuses taken in the frame.
    Final,
}

/// One of the ten frame slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    number: FrameNumber,
    state: FrameState,
    next_created: bool,
}

impl Frame {
    /// Creates an unplayed frame; frame 10 starts with final-frame rules.
    #[instrument]
    pub fn new(number: FrameNumber) -> Self {
        let state = match number.kind() {
            FrameKind::Normal => FrameState::Ready,
            FrameKind::Final => FrameState::final_ready(),
        };
        Self {
            number,
            state,
            next_created: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_state(number: FrameNumber, state: FrameState) -> Self {
        Self {
            number,
            state,
            next_created: false,
        }
    }

    /// Records one throw.
    ///
    /// The state is replaced only when the transition succeeds.
    #[instrument(skip(self), fields(frame = %self.number))]
    pub fn bowl(&mut self, pins: PinCount) -> Result<(), BowlingError> {
        if self.is_finished() {
            warn!("Throw routed to a finished frame");
            return Err(BowlingError::FrameAlreadyFinished(self.number));
        }

        self.state = self.state.bowl(self.number, pins)?;

        if self.is_finished() {
            info!(
                state = self.state.label(),
                own_score = self.own_score(),
                "Frame finished"
            );
        }
        Ok(())
    }

    /// Creates the following frame.
    ///
    /// Allowed once, after this frame has finished, and never on frame 10.
    #[instrument(skip(self), fields(frame = %self.number))]
    pub fn create_next(&mut self) -> Result<Frame, BowlingError> {
        if !self.is_finished() || self.next_created {
            warn!(
                finished = self.is_finished(),
                next_created = self.next_created,
                "Next frame requested out of order"
            );
            return Err(BowlingError::InvalidFrameTransition(self.number));
        }

        let next = self
            .number
            .next()
            .ok_or(BowlingError::InvalidFrameTransition(self.number))?;

        self.next_created = true;
        debug!(next = %next, kind = %next.kind(), "Created next frame");
        Ok(Frame::new(next))
    }

    /// Position of this frame.
    pub fn number(&self) -> FrameNumber {
        self.number
    }

    /// Rule set of this frame.
    pub fn kind(&self) -> FrameKind {
        self.number.kind()
    }

    /// Current turn state.
    pub fn state(&self) -> &FrameState {
        &self.state
    }

    /// True once the frame accepts no more throws.
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// True once `create_next` has succeeded.
    pub fn has_next(&self) -> bool {
        self.next_created
    }

    /// Throws recorded in this frame, in order.
    pub fn throws(&self) -> Vec<PinCount> {
        self.state.throws()
    }

    /// Pins attributable to this frame alone.
    pub fn own_score(&self) -> u16 {
        self.state.own_score()
    }

    /// Future throws owed to this frame (0, 1 or 2).
    pub fn pending_bonus_count(&self) -> u8 {
        self.state.pending_bonus_count()
    }
}
