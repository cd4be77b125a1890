//! Score accumulation and the settled/pending score view.

use super::pins::PinCount;
use super::state::FrameState;
use serde::{Deserialize, Serialize};

/// A frame score under construction.
///
/// Holds the pins resolved so far plus the number of future throws that
/// must still be added. Once `remaining_bonus` reaches zero the score is
/// settled and refuses further additions.
///
/// Outside the crate a pending score can only start from a finished frame
/// state, so the bonus counter never exceeds two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    total: u16,
    remaining_bonus: u8,
}

impl Score {
    /// A score with nothing left to resolve.
    pub fn settled(total: u16) -> Self {
        Self {
            total,
            remaining_bonus: 0,
        }
    }

    /// Adds one bonus throw, returning `None` if the score is already settled.
    pub fn add_bonus(self, pins: PinCount) -> Option<Self> {
        if self.is_settled() {
            return None;
        }
        Some(Self {
            total: self.total + u16::from(pins.count()),
            remaining_bonus: self.remaining_bonus - 1,
        })
    }

    /// True once no more bonus throws are owed.
    pub fn is_settled(&self) -> bool {
        self.remaining_bonus == 0
    }

    /// Pins resolved so far.
    pub fn total(&self) -> u16 {
        self.total
    }

    /// Future throws still owed to this score.
    pub fn remaining_bonus(&self) -> u8 {
        self.remaining_bonus
    }

    /// Converts to the view callers see: the total only when settled.
    pub fn view(&self) -> ScoreView {
        if self.is_settled() {
            ScoreView::Settled(self.total)
        } else {
            ScoreView::Pending
        }
    }
}

impl From<&FrameState> for Score {
    /// Starts from the frame's own pins, owing the bonus throws its state earns.
    fn from(state: &FrameState) -> Self {
        Self {
            total: state.own_score(),
            remaining_bonus: state.pending_bonus_count(),
        }
    }
}

/// A score as reported to callers: settled value or not yet determined.
///
/// `Pending` is never zero. A frame whose bonus throws have not been bowled
/// yet has no score, which is different from a score of nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreView {
    /// All required throws are recorded.
    Settled(u16),
    /// Waiting on throws that have not happened yet.
    Pending,
}

impl ScoreView {
    /// Returns the value if settled.
    pub fn value(&self) -> Option<u16> {
        match self {
            ScoreView::Settled(value) => Some(*value),
            ScoreView::Pending => None,
        }
    }

    /// True when the score is final.
    pub fn is_settled(&self) -> bool {
        matches!(self, ScoreView::Settled(_))
    }
}

impl std::fmt::Display for ScoreView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreView::Settled(value) => write!(f, "{}", value),
            ScoreView::Pending => write!(f, "pending"),
        }
    }
}
