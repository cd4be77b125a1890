//! Strictly Bowling - ten-pin bowling scoring with checked frame transitions
//!
//! Throws are fed in one at a time. Each frame validates its throws as they
//! arrive, and scores are computed on demand by looking ahead into the
//! throws that followed each strike or spare.
//!
//! # Architecture
//!
//! - **Pins**: validated 0-10 pin counts
//! - **State**: the per-frame state machine, including tenth-frame rules
//! - **Frame**: one of ten frame slots
//! - **Chain**: the game; routes throws and resolves bonuses
//! - **Contracts / Invariants**: pre/post conditions around every throw
//!
//! # Example
//!
//! ```
//! use strictly_bowling::{FrameChain, FrameNumber, ScoreView};
//!
//! # fn example() -> Result<(), strictly_bowling::BowlingError> {
//! let mut game = FrameChain::new();
//! game.record_throw(10)?;
//! assert_eq!(game.frame_score(FrameNumber::FIRST), ScoreView::Pending);
//!
//! game.record_throw(1)?;
//! game.record_throw(5)?;
//! assert_eq!(game.frame_score(FrameNumber::FIRST), ScoreView::Settled(16));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chain;
mod contracts;
mod error;
mod final_frame;
mod frame;
mod invariants;
mod pins;
mod score;
mod shared;
mod state;
mod view;

// Crate-level exports - Values
pub use error::BowlingError;
pub use pins::{MAX_PINS, PinCount};
pub use score::{Score, ScoreView};

// Crate-level exports - Frame state machine
pub use final_frame::FinalThrows;
pub use frame::{FRAME_COUNT, Frame, FrameKind, FrameNumber};
pub use state::{FrameState, SPARE_BONUS_THROWS, STRIKE_BONUS_THROWS};

// Crate-level exports - Game
pub use chain::FrameChain;
pub use shared::SharedGame;
pub use view::{FrameSnapshot, Scorecard, ScorecardFrame};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    Contract, CurrentFrameOpen, GameNotComplete, LegalThrow, PinsStanding, ThrowContract,
};
pub use invariants::{
    BowlingInvariants, FinishedPrefixInvariant, FrameKindInvariant, Invariant, InvariantSet,
    InvariantViolation, RackLimitInvariant,
};
