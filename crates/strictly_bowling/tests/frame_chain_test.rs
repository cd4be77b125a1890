//! Tests for throw routing, frame creation and read-only views.

use strictly_bowling::{
    BowlingError, FrameChain, FrameKind, FrameNumber, ScoreView, SharedGame,
};

#[test]
fn test_frames_created_lazily() {
    let mut game = FrameChain::new();
    assert_eq!(game.frames().count(), 1);

    game.record_throw(10).expect("Strike");
    assert_eq!(game.frames().count(), 2);
    assert_eq!(game.current_frame().get(), 2);

    game.record_throw(2).expect("Open throw");
    assert_eq!(game.frames().count(), 2);
}

#[test]
fn test_tenth_frame_uses_final_rules() {
    let game = FrameChain::replay(&[10; 9]).expect("Valid replay");
    let tenth = game.frame(FrameNumber::FINAL).expect("Tenth frame reached");
    assert_eq!(tenth.kind(), FrameKind::Final);
    assert!(game.frames().take(9).all(|f| f.kind() == FrameKind::Normal));
}

#[test]
fn test_snapshot_for_open_frame() {
    let game = FrameChain::replay(&[3, 4, 8]).expect("Valid replay");
    let second = game.frame_snapshot(FrameNumber::new(2).expect("valid"));
    assert_eq!(second.throws, vec![8]);
    assert!(!second.finished);

    let third = game.frame_snapshot(FrameNumber::new(3).expect("valid"));
    assert!(third.throws.is_empty());
    assert!(!third.finished);
}

#[test]
fn test_replay_stops_at_first_error() {
    let result = FrameChain::replay(&[3, 4, 9, 9, 1]);
    assert!(matches!(result, Err(BowlingError::IllegalPinCount { .. })));
}

#[test]
fn test_replay_past_game_end_fails() {
    let mut throws = vec![0; 20];
    throws.push(0);
    assert_eq!(
        FrameChain::replay(&throws),
        Err(BowlingError::GameAlreadyComplete)
    );
}

#[test]
fn test_invalid_frame_number() {
    assert_eq!(FrameNumber::new(0), Err(BowlingError::InvalidFrameNumber(0)));
    assert_eq!(FrameNumber::new(11), Err(BowlingError::InvalidFrameNumber(11)));
}

#[test]
fn test_throws_in_chronological_order() {
    let game = FrameChain::replay(&[10, 5, 5, 2]).expect("Valid replay");
    let counts: Vec<u8> = game.throws().into_iter().map(u8::from).collect();
    assert_eq!(counts, vec![10, 5, 5, 2]);
}

#[test]
fn test_shared_game_scorecard() {
    let game = SharedGame::from(FrameChain::replay(&[9, 1]).expect("Valid replay"));
    game.record_throw(4).expect("Bonus throw");
    let card = game.scorecard().expect("Lock held");
    assert_eq!(card.frames[0].score, ScoreView::Settled(14));
    assert_eq!(card.total, ScoreView::Pending);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        BowlingError::OutOfRange(11).to_string(),
        "Pin count 11 is out of range (must be 0-10)"
    );
    assert_eq!(
        BowlingError::FrameAlreadyFinished(FrameNumber::FINAL).to_string(),
        "Frame 10 is already finished"
    );
    assert_eq!(
        BowlingError::GameAlreadyComplete.to_string(),
        "Game is already complete"
    );
}
