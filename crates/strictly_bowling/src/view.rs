//! Serializable read-only projections of a game.

use super::chain::FrameChain;
use super::frame::{Frame, FrameKind, FrameNumber};
use super::score::ScoreView;
use serde::{Deserialize, Serialize};

/// What one frame looks like from outside: its throws and whether it is done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct FrameSnapshot {
    /// Frame position.
    pub frame: FrameNumber,
    /// Rule set the frame follows.
    pub kind: FrameKind,
    /// Pin counts in the order they were bowled.
    pub throws: Vec<u8>,
    /// True once the frame accepts no more throws.
    pub finished: bool,
}

impl FrameSnapshot {
    /// Snapshot of a frame the game has not reached yet.
    pub fn unplayed(frame: FrameNumber) -> Self {
        Self::new(frame, frame.kind(), Vec::new(), false)
    }
}

impl From<&Frame> for FrameSnapshot {
    fn from(frame: &Frame) -> Self {
        Self::new(
            frame.number(),
            frame.kind(),
            frame.throws().into_iter().map(u8::from).collect(),
            frame.is_finished(),
        )
    }
}

/// One scorecard row: a frame and its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorecardFrame {
    /// The frame's throws.
    #[serde(flatten)]
    pub snapshot: FrameSnapshot,
    /// The frame's score with bonuses.
    pub score: ScoreView,
}

/// The whole game at a glance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    /// All ten frames, played or not.
    pub frames: Vec<ScorecardFrame>,
    /// Game total, pending until every frame is settled.
    pub total: ScoreView,
    /// Sum of the settled frames so far.
    pub running: u16,
    /// True once frame 10 is finished.
    pub complete: bool,
}

impl From<&FrameChain> for Scorecard {
    fn from(chain: &FrameChain) -> Self {
        let frames = FrameNumber::all()
            .map(|number| ScorecardFrame {
                snapshot: chain.frame_snapshot(number),
                score: chain.frame_score(number),
            })
            .collect();

        Self {
            frames,
            total: chain.total_score(),
            running: chain.running_score_through(FrameNumber::FINAL),
            complete: chain.is_game_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unplayed_snapshot() {
        let chain = FrameChain::new();
        let snapshot = chain.frame_snapshot(FrameNumber::FINAL);
        assert_eq!(snapshot.kind, FrameKind::Final);
        assert!(snapshot.throws.is_empty());
        assert!(!snapshot.finished);
    }

    #[test]
    fn test_scorecard_lists_ten_frames() {
        let chain = FrameChain::replay(&[10, 1, 5]).unwrap();
        let card = chain.scorecard();
        assert_eq!(card.frames.len(), 10);
        assert_eq!(card.frames[0].snapshot.throws, vec![10]);
        assert_eq!(card.frames[0].score, ScoreView::Settled(16));
        assert_eq!(card.frames[1].snapshot.throws, vec![1, 5]);
        assert_eq!(card.frames[1].score, ScoreView::Settled(6));
        assert_eq!(card.running, 22);
        assert_eq!(card.total, ScoreView::Pending);
        assert!(!card.complete);
    }

    #[test]
    fn test_scorecard_json_shape() {
        let chain = FrameChain::replay(&[4, 3]).unwrap();
        let json = serde_json::to_value(chain.scorecard()).unwrap();
        assert_eq!(json["frames"][0]["frame"], 1);
        assert_eq!(json["frames"][0]["kind"], "normal");
        assert_eq!(json["frames"][0]["throws"], serde_json::json!([4, 3]));
        assert_eq!(json["frames"][0]["finished"], true);
        assert_eq!(json["frames"][0]["score"]["settled"], 7);
        assert_eq!(json["frames"][1]["score"], "pending");
        assert_eq!(json["total"], "pending");
    }
}
