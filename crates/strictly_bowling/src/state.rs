//! Per-frame turn state machine.
//!
//! Every state a frame can be in is a variant of [`FrameState`], and the
//! whole transition table lives in one exhaustive `match` in
//! [`FrameState::bowl`].

use super::error::BowlingError;
use super::final_frame::FinalThrows;
use super::frame::FrameNumber;
use super::pins::{MAX_PINS, PinCount};
use serde::Serialize;
use tracing::{debug, instrument};

/// Bonus throws owed by a strike in frames 1-9.
pub const STRIKE_BONUS_THROWS: u8 = 2;

/// Bonus throws owed by a spare in frames 1-9.
pub const SPARE_BONUS_THROWS: u8 = 1;

/// Where a frame is in its turn, with the throws taken so far.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, strum::IntoStaticStr)]
pub enum FrameState {
    /// No throw yet.
    Ready,
    /// One throw that left pins standing.
    FirstThrowTaken(PinCount),
    /// The whole rack on the first throw.
    Strike,
    /// The whole rack across two throws.
    Spare(PinCount, PinCount),
    /// Pins left standing after two throws.
    Miss(PinCount, PinCount),
    /// Tenth frame still accepting throws.
    FinalPending(FinalThrows),
    /// Tenth frame with every allowed throw taken.
    FinalSettled(FinalThrows),
}

/// Checks that two throws fit in one rack of ten pins.
pub(crate) fn check_rack(first: PinCount, second: PinCount) -> Result<u8, BowlingError> {
    first
        .combined_with(second)
        .map_err(|_| BowlingError::IllegalPinCount { first, second })
}

impl FrameState {
    /// Initial state of a tenth frame.
    pub fn final_ready() -> Self {
        FrameState::FinalPending(FinalThrows::default())
    }

    /// Variant name, for logs.
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Applies one throw, returning the next state.
    ///
    /// `self` is left untouched; on error the caller still holds the
    /// previous state. `frame` is only used to label errors.
    #[instrument(skip(self), fields(state = self.label()))]
    pub fn bowl(&self, frame: FrameNumber, pins: PinCount) -> Result<FrameState, BowlingError> {
        let next = match self {
            FrameState::Ready if pins.is_strike() => FrameState::Strike,
            FrameState::Ready => FrameState::FirstThrowTaken(pins),
            FrameState::FirstThrowTaken(first) => {
                check_rack(*first, pins)?;
                if first.completes_ten_with(pins) {
                    FrameState::Spare(*first, pins)
                } else {
                    FrameState::Miss(*first, pins)
                }
            }
            FrameState::Strike | FrameState::Spare(..) | FrameState::Miss(..) => {
                return Err(BowlingError::FrameAlreadyFinished(frame));
            }
            FrameState::FinalPending(throws) => {
                let throws = throws.record(frame, pins)?;
                if throws.is_finished() {
                    FrameState::FinalSettled(throws)
                } else {
                    FrameState::FinalPending(throws)
                }
            }
            FrameState::FinalSettled(_) => {
                return Err(BowlingError::FrameAlreadyFinished(frame));
            }
        };

        debug!(next = next.label(), "Frame state transition");
        Ok(next)
    }

    /// True once the frame accepts no more throws.
    pub fn is_finished(&self) -> bool {
        match self {
            FrameState::Ready | FrameState::FirstThrowTaken(_) | FrameState::FinalPending(_) => {
                false
            }
            FrameState::Strike
            | FrameState::Spare(..)
            | FrameState::Miss(..)
            | FrameState::FinalSettled(_) => true,
        }
    }

    /// True for the tenth-frame variants.
    pub fn is_final(&self) -> bool {
        matches!(self, FrameState::FinalPending(_) | FrameState::FinalSettled(_))
    }

    /// Throws taken in this frame, in order.
    pub fn throws(&self) -> Vec<PinCount> {
        match self {
            FrameState::Ready => Vec::new(),
            FrameState::FirstThrowTaken(first) => vec![*first],
            FrameState::Strike => vec![PinCount::STRIKE],
            FrameState::Spare(first, second) | FrameState::Miss(first, second) => {
                vec![*first, *second]
            }
            FrameState::FinalPending(throws) | FrameState::FinalSettled(throws) => {
                throws.throws().to_vec()
            }
        }
    }

    /// Pins standing for the next throw; zero once the frame is finished.
    pub fn pins_standing(&self) -> u8 {
        match self {
            FrameState::Ready => MAX_PINS,
            FrameState::FirstThrowTaken(first) => MAX_PINS - first.count(),
            FrameState::FinalPending(throws) => throws.pins_standing(),
            FrameState::Strike
            | FrameState::Spare(..)
            | FrameState::Miss(..)
            | FrameState::FinalSettled(_) => 0,
        }
    }

    /// Pins this frame scores by itself, before any borrowed bonus.
    pub fn own_score(&self) -> u16 {
        self.throws().iter().map(|pins| u16::from(pins.count())).sum()
    }

    /// Future throws this frame borrows from later frames.
    ///
    /// The tenth frame takes its bonus throws itself, so it never owes any.
    pub fn pending_bonus_count(&self) -> u8 {
        match self {
            FrameState::Strike => STRIKE_BONUS_THROWS,
            FrameState::Spare(..) => SPARE_BONUS_THROWS,
            FrameState::Ready
            | FrameState::FirstThrowTaken(_)
            | FrameState::Miss(..)
            | FrameState::FinalPending(_)
            | FrameState::FinalSettled(_) => 0,
        }
    }
}
