//! Tests for the game session state machine and scoring.

mod common;

use common::board_of;
use strictly_trivia::{Board, CategoryId, ClueId, GameSession, Mode, TriviaError};
use tokio::time::{Duration, Instant};

const PARIS: &[(&str, &str)] = &[
    ("capital of Italy", "Rome"),
    ("capital of France", "Paris"),
];

/// One category (id 1) whose $200 clue (id 1001) is "Paris".
fn capitals_board() -> Board {
    board_of(&[(1, PARIS)])
}

fn started_session() -> GameSession {
    let mut session = GameSession::new(Duration::from_millis(3000));
    session.start(capitals_board());
    session
}

#[test]
fn test_start_resets_to_idle_with_zero_score() {
    let session = started_session();
    assert_eq!(session.mode(), Mode::Idle);
    assert_eq!(session.score(), 0);
    assert!(session.active_clue().is_none());
    assert_eq!(session.board().remaining_clues(), 2);
}

#[test]
fn test_open_clue_moves_it_off_the_board() {
    let mut session = started_session();

    let clue = session
        .open_clue(CategoryId(1), ClueId(1001))
        .expect("Open failed")
        .expect("Open ignored")
        .clone();

    assert_eq!(clue.value(), 200);
    assert_eq!(session.mode(), Mode::AwaitingAnswer);
    assert_eq!(session.active_clue(), Some(&clue));
    assert_eq!(session.board().remaining_clues(), 1);
}

#[test]
fn test_correct_answer_ignores_case_and_whitespace() {
    let mut session = started_session();
    session.open_clue(CategoryId(1), ClueId(1001)).expect("Open failed");

    let outcome = session.submit_answer("  paris  ").expect("Answer ignored");

    assert!(outcome.correct);
    assert_eq!(outcome.new_score, 200);
    assert_eq!(outcome.correct_answer, "Paris");
    assert_eq!(session.mode(), Mode::ShowingResult);
}

#[test]
fn test_wrong_answer_goes_negative() {
    let mut session = started_session();
    session.open_clue(CategoryId(1), ClueId(1001)).expect("Open failed");

    let outcome = session.submit_answer("London").expect("Answer ignored");

    assert!(!outcome.correct);
    assert_eq!(outcome.new_score, -200);
    assert_eq!(outcome.correct_answer, "Paris");
    assert_eq!(session.score(), -200);
}

#[test]
fn test_acknowledge_returns_to_idle_and_clears_clue() {
    let mut session = started_session();
    session.open_clue(CategoryId(1), ClueId(1001)).expect("Open failed");
    session.submit_answer("Paris");

    assert!(session.acknowledge_result());

    assert_eq!(session.mode(), Mode::Idle);
    assert!(session.active_clue().is_none());
    assert_eq!(session.score(), 200);
}

#[test]
fn test_open_revealed_clue_is_not_found() {
    let mut session = started_session();
    session.open_clue(CategoryId(1), ClueId(1001)).expect("Open failed");
    session.submit_answer("Paris");
    session.acknowledge_result();
    let board_before = session.board().clone();

    let result = session.open_clue(CategoryId(1), ClueId(1001));

    assert!(matches!(result, Err(TriviaError::ClueNotFound { .. })));
    assert_eq!(session.mode(), Mode::Idle);
    assert_eq!(session.board(), &board_before);
    assert_eq!(session.score(), 200);
}

#[test]
fn test_open_unknown_category_is_not_found() {
    let mut session = started_session();

    let result = session.open_clue(CategoryId(99), ClueId(1001));

    assert!(matches!(
        result,
        Err(TriviaError::ClueNotFound {
            category_id: CategoryId(99),
            clue_id: ClueId(1001)
        })
    ));
    assert_eq!(session.board(), &capitals_board());
}

#[test]
fn test_open_while_awaiting_answer_is_noop() {
    let mut session = started_session();
    session.open_clue(CategoryId(1), ClueId(1001)).expect("Open failed");
    let board_before = session.board().clone();
    let active_before = session.active_clue().cloned();

    let result = session.open_clue(CategoryId(1), ClueId(1000));

    assert!(matches!(result, Ok(None)));
    assert_eq!(session.board(), &board_before);
    assert_eq!(session.active_clue().cloned(), active_before);
    assert_eq!(session.mode(), Mode::AwaitingAnswer);
}

#[test]
fn test_open_while_showing_result_is_noop() {
    let mut session = started_session();
    session.open_clue(CategoryId(1), ClueId(1001)).expect("Open failed");
    session.submit_answer("Paris");

    let result = session.open_clue(CategoryId(1), ClueId(1000));

    assert!(matches!(result, Ok(None)));
    assert_eq!(session.mode(), Mode::ShowingResult);
    assert_eq!(session.board().remaining_clues(), 1);
    assert_eq!(session.active_clue().map(|c| c.id()), Some(ClueId(1001)));
}

#[test]
fn test_submit_outside_awaiting_answer_is_ignored() {
    let mut session = started_session();
    assert!(session.submit_answer("Paris").is_none());

    session.open_clue(CategoryId(1), ClueId(1001)).expect("Open failed");
    session.submit_answer("Paris");
    // A second submission for the same clue must not score again.
    assert!(session.submit_answer("Paris").is_none());
    assert_eq!(session.score(), 200);
}

#[test]
fn test_acknowledge_outside_showing_result_is_ignored() {
    let mut session = started_session();
    assert!(!session.acknowledge_result());

    session.open_clue(CategoryId(1), ClueId(1001)).expect("Open failed");
    assert!(!session.acknowledge_result());
    assert_eq!(session.mode(), Mode::AwaitingAnswer);
}

#[test]
fn test_last_clue_removes_category() {
    let mut session = GameSession::default();
    session.start(board_of(&[
        (1, &[("only clue", "yes")]),
        (2, &[("other", "no")]),
    ]));

    session.open_clue(CategoryId(1), ClueId(1000)).expect("Open failed");

    assert!(session.board().category(CategoryId(1)).is_none());
    assert_eq!(session.board().categories().len(), 1);
    assert!(session.board().categories().iter().all(|c| !c.clues().is_empty()));
}

#[test]
fn test_start_discards_previous_board_and_score() {
    let mut session = started_session();
    session.open_clue(CategoryId(1), ClueId(1001)).expect("Open failed");
    session.submit_answer("London");

    session.start(board_of(&[(5, PARIS)]));

    assert_eq!(session.mode(), Mode::Idle);
    assert_eq!(session.score(), 0);
    assert!(session.active_clue().is_none());
    assert!(session.last_outcome().is_none());
    assert!(session.board().category(CategoryId(1)).is_none());
    assert!(session.board().category(CategoryId(5)).is_some());
}

#[tokio::test(start_paused = true)]
async fn test_scheduled_dismissal_fires_after_delay() {
    let mut session = started_session();
    session.open_clue(CategoryId(1), ClueId(1001)).expect("Open failed");
    session.submit_answer("Paris");
    let pending = session.pending_dismissal().expect("No dismissal scheduled");

    assert!(!session.fire_due_dismissal(Instant::now()));
    tokio::time::advance(Duration::from_millis(2999)).await;
    assert!(!session.fire_due_dismissal(Instant::now()));
    assert_eq!(session.mode(), Mode::ShowingResult);

    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(Instant::now() >= pending.deadline);
    assert!(session.fire_due_dismissal(Instant::now()));
    assert_eq!(session.mode(), Mode::Idle);
    assert!(session.active_clue().is_none());
    assert!(session.pending_dismissal().is_none());
}

#[test]
fn test_stale_ticket_cannot_clear_new_session() {
    let mut session = started_session();
    session.open_clue(CategoryId(1), ClueId(1001)).expect("Open failed");
    session.submit_answer("Paris");
    let stale = session.pending_dismissal().expect("No dismissal scheduled").ticket;

    // Restart, then reach ShowingResult again on the fresh board.
    session.start(capitals_board());
    session.open_clue(CategoryId(1), ClueId(1000)).expect("Open failed");
    assert!(!session.acknowledge_scheduled(stale));
    assert_eq!(session.mode(), Mode::AwaitingAnswer);

    session.submit_answer("Rome");
    assert!(!session.acknowledge_scheduled(stale));
    assert_eq!(session.mode(), Mode::ShowingResult);

    let current = session.pending_dismissal().expect("No dismissal scheduled").ticket;
    assert!(session.acknowledge_scheduled(current));
    assert_eq!(session.mode(), Mode::Idle);
}

#[test]
fn test_ticket_from_earlier_answer_is_stale() {
    let mut session = started_session();
    session.open_clue(CategoryId(1), ClueId(1000)).expect("Open failed");
    session.submit_answer("Rome");
    let first = session.pending_dismissal().expect("No dismissal scheduled").ticket;
    session.acknowledge_result();

    session.open_clue(CategoryId(1), ClueId(1001)).expect("Open failed");
    session.submit_answer("Paris");

    assert!(!session.acknowledge_scheduled(first));
    assert_eq!(session.mode(), Mode::ShowingResult);
}

#[test]
fn test_decoded_board_drops_empty_and_duplicate_categories() {
    let board: Board = serde_json::from_str(
        r#"{"categories": [
            {"id": 1, "title": "empty", "clues": []},
            {"id": 2, "title": "kept", "clues": [{"id": 5, "value": 100, "question": "Q", "answer": "A"}]},
            {"id": 2, "title": "again", "clues": [{"id": 6, "value": 100, "question": "Q", "answer": "A"}]}
        ]}"#,
    )
    .expect("Board parse failed");

    assert_eq!(board.categories().len(), 1);
    assert_eq!(board.categories()[0].title(), "kept");
    assert!(board.category(CategoryId(1)).is_none());
}

#[test]
fn test_serialized_board_decodes_to_same_board() {
    let board = capitals_board();
    let json = serde_json::to_string(&board).expect("Serialize failed");

    let decoded: Board = serde_json::from_str(&json).expect("Board parse failed");

    assert_eq!(decoded, board);
}
