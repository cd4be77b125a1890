//! Error type for throw validation and frame transitions.

use super::frame::FrameNumber;
use super::pins::PinCount;

/// Error that can occur when validating or applying a throw.
///
/// Every variant is a caller-input problem: the rejected operation leaves
/// the game exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BowlingError {
    /// A pin count outside 0-10.
    #[display("Pin count {} is out of range (must be 0-10)", _0)]
    OutOfRange(i32),

    /// Two throws of the same rack knock down more than 10 pins.
    #[display("Throws of {} and {} exceed the 10 pins in the rack", first, second)]
    IllegalPinCount {
        /// Pins already knocked down in the rack.
        first: PinCount,
        /// The rejected throw.
        second: PinCount,
    },

    /// The frame has already met its finishing condition.
    #[display("Frame {} is already finished", _0)]
    FrameAlreadyFinished(FrameNumber),

    /// The next frame was requested before the frame finished, or twice.
    #[display("Frame {} cannot create its next frame", _0)]
    InvalidFrameTransition(FrameNumber),

    /// The tenth frame is finished; no more throws are accepted.
    #[display("Game is already complete")]
    GameAlreadyComplete,

    /// A frame index outside 1-10.
    #[display("Frame number {} is out of range (must be 1-10)", _0)]
    InvalidFrameNumber(i32),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),

    /// The lock guarding a shared game was poisoned by a panicking writer.
    #[display("Shared game lock is poisoned")]
    LockPoisoned,
}

impl std::error::Error for BowlingError {}
