//! Contract-based validation for recording throws.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::chain::FrameChain;
use super::error::BowlingError;
use super::invariants::{BowlingInvariants, InvariantSet};
use super::pins::{MAX_PINS, PinCount};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), BowlingError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), BowlingError>;
}

// ─────────────────────────────────────────────────────────────
//  Throw Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the tenth frame must not be finished.
pub struct GameNotComplete;

impl GameNotComplete {
    /// Fails with `GameAlreadyComplete` once frame 10 is finished.
    #[instrument(skip(chain))]
    pub fn check(chain: &FrameChain) -> Result<(), BowlingError> {
        if chain.is_game_complete() {
            Err(BowlingError::GameAlreadyComplete)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the frame under the cursor exists and is open.
pub struct CurrentFrameOpen;

impl CurrentFrameOpen {
    /// Fails with `FrameAlreadyFinished` if the cursor points at a finished frame.
    #[instrument(skip(chain))]
    pub fn check(chain: &FrameChain) -> Result<(), BowlingError> {
        let number = chain.current_frame();
        match chain.frame(number) {
            Some(frame) if frame.is_finished() => Err(BowlingError::FrameAlreadyFinished(number)),
            Some(_) => Ok(()),
            None => Err(BowlingError::InvariantViolation(format!(
                "Cursor points at unreached frame {}",
                number
            ))),
        }
    }
}

/// Precondition: the throw knocks down no more pins than are standing.
pub struct PinsStanding;

impl PinsStanding {
    /// Fails with `IllegalPinCount` if `pins` exceeds what is left in the
    /// current rack. The error's `first` is the pins already down.
    #[instrument(skip(chain))]
    pub fn check(pins: &PinCount, chain: &FrameChain) -> Result<(), BowlingError> {
        let Some(frame) = chain.frame(chain.current_frame()) else {
            return Ok(());
        };
        let standing = frame.state().pins_standing();
        if pins.count() <= standing {
            return Ok(());
        }

        let down = PinCount::new(MAX_PINS - standing)?;
        warn!(standing, pins = %pins, "Throw exceeds standing pins");
        Err(BowlingError::IllegalPinCount {
            first: down,
            second: *pins,
        })
    }
}

/// Composite precondition: a throw is legal if the game is still running,
/// the current frame is open and enough pins are standing.
pub struct LegalThrow;

impl LegalThrow {
    /// Validates all preconditions for a throw.
    #[instrument(skip(chain))]
    pub fn check(pins: &PinCount, chain: &FrameChain) -> Result<(), BowlingError> {
        GameNotComplete::check(chain)?;
        CurrentFrameOpen::check(chain)?;
        PinsStanding::check(pins, chain)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Throw Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for recording a throw.
///
/// Preconditions:
/// - Game not complete
/// - Current frame open
/// - Enough pins standing
///
/// Postconditions:
/// - Chain invariants hold
/// - Exactly one throw was added
/// - The cursor did not move backwards
pub struct ThrowContract;

impl Contract<FrameChain, PinCount> for ThrowContract {
    fn pre(chain: &FrameChain, pins: &PinCount) -> Result<(), BowlingError> {
        LegalThrow::check(pins, chain)
    }

    fn post(before: &FrameChain, after: &FrameChain) -> Result<(), BowlingError> {
        BowlingInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            BowlingError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let (thrown_before, thrown_after) = (before.throws().len(), after.throws().len());
        if thrown_after != thrown_before + 1 {
            warn!(thrown_before, thrown_after, "Throw count did not grow by one");
            return Err(BowlingError::InvariantViolation(format!(
                "Expected {} throws after recording, found {}",
                thrown_before + 1,
                thrown_after
            )));
        }

        if after.cursor() < before.cursor() {
            warn!(before = before.cursor(), after = after.cursor(), "Cursor regressed");
            return Err(BowlingError::InvariantViolation(
                "Cursor moved backwards".to_string(),
            ));
        }

        Ok(())
    }
}
