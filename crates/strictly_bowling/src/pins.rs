//! Validated pin counts.

use super::error::BowlingError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Pins standing in a full rack.
pub const MAX_PINS: u8 = 10;

/// Pins knocked down by a single throw (0-10).
///
/// A `PinCount` can only be constructed in range, so every value held by a
/// frame is already valid. Deserialization goes through the same check.
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
pub struct PinCount(u8);

impl PinCount {
    /// No pins knocked down.
    pub const GUTTER: PinCount = PinCount(0);

    /// Every pin knocked down.
    pub const STRIKE: PinCount = PinCount(MAX_PINS);

    /// Creates a pin count, failing with `OutOfRange` above 10.
    #[instrument]
    pub fn new(count: u8) -> Result<Self, BowlingError> {
        if count > MAX_PINS {
            return Err(BowlingError::OutOfRange(i32::from(count)));
        }
        Ok(Self(count))
    }

    /// Returns the number of pins.
    pub fn count(self) -> u8 {
        self.0
    }

    /// Sum of this throw and `other` as one rack.
    ///
    /// Fails with `OutOfRange` when the two throws would need more than
    /// ten pins.
    pub fn combined_with(self, other: PinCount) -> Result<u8, BowlingError> {
        let total = self.0 + other.0;
        if total > MAX_PINS {
            return Err(BowlingError::OutOfRange(i32::from(total)));
        }
        Ok(total)
    }

    /// True when no pins fell.
    pub fn is_gutter(self) -> bool {
        self.0 == 0
    }

    /// True when the whole rack fell.
    pub fn is_strike(self) -> bool {
        self.0 == MAX_PINS
    }

    /// True when this throw and `other` clear the rack together.
    pub fn completes_ten_with(self, other: PinCount) -> bool {
        self.0 + other.0 == MAX_PINS
    }
}

impl TryFrom<u8> for PinCount {
    type Error = BowlingError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl TryFrom<i32> for PinCount {
    type Error = BowlingError;

    fn try_from(count: i32) -> Result<Self, Self::Error> {
        u8::try_from(count)
            .map_err(|_| BowlingError::OutOfRange(count))
            .and_then(Self::new)
    }
}

impl From<PinCount> for u8 {
    fn from(pins: PinCount) -> Self {
        pins.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_range() {
        for count in 0..=MAX_PINS {
            assert_eq!(PinCount::new(count).map(PinCount::count), Ok(count));
        }
    }

    #[test]
    fn test_rejects_above_ten() {
        assert_eq!(PinCount::new(11), Err(BowlingError::OutOfRange(11)));
    }

    #[test]
    fn test_rejects_negative() {
        assert_eq!(PinCount::try_from(-1), Err(BowlingError::OutOfRange(-1)));
        assert_eq!(PinCount::try_from(300), Err(BowlingError::OutOfRange(300)));
    }

    #[test]
    fn test_predicates() {
        assert!(PinCount::GUTTER.is_gutter());
        assert!(PinCount::STRIKE.is_strike());
        let four = PinCount::new(4).unwrap();
        let six = PinCount::new(6).unwrap();
        assert!(four.completes_ten_with(six));
        assert!(!four.completes_ten_with(four));
        assert!(!four.is_gutter());
        assert!(!six.is_strike());
    }

    #[test]
    fn test_combined_with() {
        let three = PinCount::new(3).unwrap();
        let seven = PinCount::new(7).unwrap();
        let eight = PinCount::new(8).unwrap();
        assert_eq!(three.combined_with(seven), Ok(10));
        assert_eq!(seven.combined_with(eight), Err(BowlingError::OutOfRange(15)));
    }

    #[test]
    fn test_serde_validates() {
        let pins: PinCount = serde_json::from_str("7").unwrap();
        assert_eq!(pins.count(), 7);
        assert!(serde_json::from_str::<PinCount>("12").is_err());
        assert_eq!(serde_json::to_string(&PinCount::STRIKE).unwrap(), "10");
    }
}
