//! Tests for batch scoring and line-by-line play.

use std::io::Cursor;
use strictly_bowling::ScoreView;
use strictly_scorer::{InvalidThrowPolicy, PlayOutcome, ScorerConfig, play, score_throws};

fn compact(policy: InvalidThrowPolicy) -> ScorerConfig {
    ScorerConfig::new("off".to_string(), false, policy)
}

fn output_lines(output: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8(output.to_vec())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_score_perfect_game() {
    let mut output = Vec::new();
    let card = score_throws(&[10; 12], &mut output, &compact(InvalidThrowPolicy::Reprompt)).unwrap();
    assert_eq!(card.total, ScoreView::Settled(300));
    assert!(card.complete);

    let lines = output_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["total"]["settled"], 300);
}

#[test]
fn test_score_partial_game() {
    let mut output = Vec::new();
    let card = score_throws(&[10, 1, 5, 7], &mut output, &ScorerConfig::default()).unwrap();
    assert_eq!(card.total, ScoreView::Pending);
    assert_eq!(card.running, 22);
    assert!(!card.complete);
}

#[test]
fn test_score_names_rejected_throw() {
    let mut output = Vec::new();
    let err = score_throws(&[5, 6], &mut output, &ScorerConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Throw 2 (6) rejected"));
    assert!(output.is_empty());
}

#[test]
fn test_score_rejects_negative_throw() {
    let mut output = Vec::new();
    let err = score_throws(&[3, -1], &mut output, &ScorerConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Throw 2 (-1) rejected"));
    assert!(format!("{:#}", err).contains("out of range"));
}

#[test]
fn test_score_rejects_throw_after_game() {
    let mut output = Vec::new();
    let mut throws = vec![0; 20];
    throws.push(4);
    let err = score_throws(&throws, &mut output, &ScorerConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Throw 21 (4) rejected"));
}

#[test]
fn test_score_reports_out_of_range_after_game_as_complete() {
    let mut throws = vec![0; 20];
    throws.push(11);
    let err = score_throws(&throws, &mut Vec::<u8>::new(), &ScorerConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Throw 21 (11) rejected"));
    assert!(format!("{:#}", err).contains("Game is already complete"));

    let mut throws = vec![0; 20];
    throws.push(-1);
    let err = score_throws(&throws, &mut Vec::<u8>::new(), &ScorerConfig::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("Game is already complete"));
}

#[test]
fn test_play_rejects_negative_throw() {
    let input = Cursor::new("-1\n");
    let mut output = Vec::new();
    let outcome = play(input, &mut output, &compact(InvalidThrowPolicy::Abort)).unwrap();

    match outcome {
        PlayOutcome::Aborted { rejection, .. } => {
            assert_eq!(rejection.input, "-1");
            assert!(rejection.error.contains("Pin count -1 is out of range"));
        }
        other => panic!("Expected abort, got {:?}", other),
    }
}

#[test]
fn test_play_prints_card_after_each_throw() {
    let input = Cursor::new("3\n\n4\n10\n");
    let mut output = Vec::new();
    let outcome = play(input, &mut output, &compact(InvalidThrowPolicy::Reprompt)).unwrap();

    let lines = output_lines(&output);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1]["frames"][0]["score"]["settled"], 7);
    assert_eq!(lines[2]["frames"][1]["score"], "pending");

    match outcome {
        PlayOutcome::InputEnded(card) => assert_eq!(card.running, 7),
        other => panic!("Expected input to end first, got {:?}", other),
    }
}

#[test]
fn test_play_reprompts_after_rejection() {
    let input = Cursor::new("8\n5\nseven\n2\n");
    let mut output = Vec::new();
    let outcome = play(input, &mut output, &compact(InvalidThrowPolicy::Reprompt)).unwrap();

    let lines = output_lines(&output);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1]["input"], "5");
    assert!(lines[1]["error"].as_str().unwrap().contains("8 and 5"));
    assert_eq!(lines[2]["input"], "seven");
    assert_eq!(lines[3]["frames"][0]["throws"], serde_json::json!([8, 2]));
    assert_eq!(outcome.scorecard().frames[0].score, ScoreView::Pending);
}

#[test]
fn test_play_aborts_on_rejection() {
    let input = Cursor::new("4\n11\n3\n");
    let mut output = Vec::new();
    let outcome = play(input, &mut output, &compact(InvalidThrowPolicy::Abort)).unwrap();

    match outcome {
        PlayOutcome::Aborted {
            scorecard,
            rejection,
        } => {
            assert_eq!(rejection.input, "11");
            assert_eq!(scorecard.frames[0].snapshot.throws, vec![4]);
        }
        other => panic!("Expected abort, got {:?}", other),
    }
    assert_eq!(output_lines(&output).len(), 2);
}

#[test]
fn test_play_stops_when_game_completes() {
    let input = Cursor::new(format!("{}5\n", "10\n".repeat(12)));
    let mut output = Vec::new();
    let outcome = play(input, &mut output, &compact(InvalidThrowPolicy::Abort)).unwrap();

    assert!(matches!(&outcome, PlayOutcome::Complete(card) if card.total == ScoreView::Settled(300)));
    assert_eq!(output_lines(&output).len(), 12);
}

#[test]
fn test_pretty_output_spans_lines() {
    let mut output = Vec::new();
    score_throws(&[1, 2], &mut output, &ScorerConfig::default()).unwrap();
    let text = String::from_utf8(output).unwrap();
    assert!(text.lines().count() > 1);
    let card: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(card["running"], 3);
}
