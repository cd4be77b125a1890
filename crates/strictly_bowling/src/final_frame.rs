//! Tenth-frame rules.
//!
//! The last frame takes its bonus throws itself instead of borrowing them
//! from a following frame:
//!
//! - a strike on the first throw resets the rack and earns two more throws;
//! - a spare on the first two throws earns one more;
//! - a miss ends the frame after two throws.
//!
//! After a strike the rack is reset, so the next two throws form their own
//! pair. That pair is clamped to ten pins unless its first throw is also a
//! strike, which resets the rack again.

use super::error::BowlingError;
use super::frame::FrameNumber;
use super::pins::{MAX_PINS, PinCount};
use super::state::check_rack;
use serde::Serialize;
use tracing::{instrument, warn};

/// Throws recorded in the tenth frame (at most three).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FinalThrows {
    throws: Vec<PinCount>,
}

impl FinalThrows {
    /// Most throws the tenth frame can hold.
    pub const MAX_THROWS: usize = 3;

    /// Rebuilds a record by replaying `throws` through the tenth-frame rules.
    pub fn from_throws(frame: FrameNumber, throws: &[PinCount]) -> Result<Self, BowlingError> {
        throws
            .iter()
            .try_fold(Self::default(), |record, pins| record.record(frame, *pins))
    }

    #[cfg(test)]
    pub(crate) fn unchecked(throws: Vec<PinCount>) -> Self {
        Self { throws }
    }

    /// Throws taken so far, in order.
    pub fn throws(&self) -> &[PinCount] {
        &self.throws
    }

    /// Number of throws taken.
    pub fn len(&self) -> usize {
        self.throws.len()
    }

    /// True before the first throw.
    pub fn is_empty(&self) -> bool {
        self.throws.is_empty()
    }

    /// True when the first two throws earned a third.
    pub fn earned_bonus(&self) -> bool {
        match self.throws.as_slice() {
            [first, ..] if first.is_strike() => true,
            [first, second, ..] => first.completes_ten_with(*second),
            _ => false,
        }
    }

    /// True once no further throw is allowed.
    pub fn is_finished(&self) -> bool {
        match self.throws.len() {
            0 | 1 => false,
            2 => !self.earned_bonus(),
            _ => true,
        }
    }

    /// Pins standing for the next throw; zero once the frame is finished.
    pub fn pins_standing(&self) -> u8 {
        match self.throws.as_slice() {
            [first] if !first.is_strike() => MAX_PINS - first.count(),
            [first, second] if first.is_strike() && !second.is_strike() => {
                MAX_PINS - second.count()
            }
            _ if self.is_finished() => 0,
            _ => MAX_PINS,
        }
    }

    /// Validates `pins` as the next throw and returns the extended record.
    #[instrument(skip(self), fields(taken = self.throws.len()))]
    pub fn record(&self, frame: FrameNumber, pins: PinCount) -> Result<FinalThrows, BowlingError> {
        if self.is_finished() {
            warn!("Throw after the tenth frame finished");
            return Err(BowlingError::FrameAlreadyFinished(frame));
        }

        // Only a throw that shares a rack with the one before it is clamped.
        match self.throws.as_slice() {
            [] => {}
            [first] if first.is_strike() => {}
            [first] => {
                check_rack(*first, pins)?;
            }
            [first, second] if first.is_strike() && !second.is_strike() => {
                check_rack(*second, pins)?;
            }
            [_, _] => {}
            _ => return Err(BowlingError::FrameAlreadyFinished(frame)),
        }

        let mut throws = self.throws.clone();
        throws.push(pins);
        Ok(FinalThrows { throws })
    }
}
