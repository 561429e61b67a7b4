//! The game session: board, active-clue state machine and score.
//!
//! Every transition is a synchronous `&mut self` call, so the mode guard
//! is the only concurrency control the session needs. A guard that does
//! not match the current mode turns the call into a no-op.

use serde::{Deserialize, Serialize};
use strum::Display;
use tokio::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use super::error::TriviaError;
use super::normalize::fold_answer;
use super::types::{Board, CategoryId, Clue, ClueId};

/// Default time a result stays on screen before the session re-arms.
pub const DEFAULT_RESULT_DELAY: Duration = Duration::from_millis(3000);

/// Interaction state reported to the render sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Mode {
    /// No clue open.
    Idle,
    /// One clue open, answer box visible.
    AwaitingAnswer,
    /// Feedback visible, score already updated.
    ShowingResult,
}

/// Result of a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    /// Whether the answer matched.
    pub correct: bool,
    /// The stored answer with its original casing.
    pub correct_answer: String,
    /// Dollar value that was won or lost.
    pub value: u32,
    /// Score after applying the outcome.
    pub new_score: i64,
}

/// Identifies one scheduled dismissal. Only the current ticket may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DismissTicket(u64);

/// A scheduled return to [`Mode::Idle`], owned by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDismissal {
    /// Ticket that must match for the dismissal to take effect.
    pub ticket: DismissTicket,
    /// When the dismissal becomes due.
    pub deadline: Instant,
}

/// Active-clue state. The clue lives in the variant, so it cannot outlive
/// its mode.
#[derive(Debug, Clone)]
enum SessionState {
    Idle,
    AwaitingAnswer {
        clue: Clue,
    },
    ShowingResult {
        clue: Clue,
        outcome: AnswerOutcome,
        dismissal: PendingDismissal,
    },
}

/// A single local game session.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    state: SessionState,
    score: i64,
    result_delay: Duration,
    epoch: u64,
    last_outcome: Option<AnswerOutcome>,
}

impl GameSession {
    /// Creates an idle session with an empty board.
    #[instrument]
    pub fn new(result_delay: Duration) -> Self {
        Self {
            board: Board::default(),
            state: SessionState::Idle,
            score: 0,
            result_delay,
            epoch: 0,
            last_outcome: None,
        }
    }

    /// Installs a fresh board and resets the score.
    ///
    /// Any pending dismissal from the previous board is invalidated.
    #[instrument(skip(self, board), fields(categories = board.categories().len()))]
    pub fn start(&mut self, board: Board) {
        self.epoch += 1;
        self.board = board;
        self.state = SessionState::Idle;
        self.score = 0;
        self.last_outcome = None;
        info!(
            epoch = self.epoch,
            clues = self.board.remaining_clues(),
            "Session started"
        );
    }

    /// Opens a clue for answering.
    ///
    /// Returns `Ok(None)` without touching anything when the session is not
    /// idle. Returns [`TriviaError::ClueNotFound`] when the clue is not on the
    /// board, also without touching anything.
    #[instrument(skip(self), fields(mode = %self.mode()))]
    pub fn open_clue(
        &mut self,
        category_id: CategoryId,
        clue_id: ClueId,
    ) -> Result<Option<&Clue>, TriviaError> {
        if !matches!(self.state, SessionState::Idle) {
            debug!("Ignoring open while a clue is active");
            return Ok(None);
        }

        let clue = self.board.take_clue(category_id, clue_id)?;
        info!(value = clue.value(), "Clue opened");
        self.state = SessionState::AwaitingAnswer { clue };
        Ok(self.active_clue())
    }

    /// Scores an answer against the active clue.
    ///
    /// Returns `None` when no clue is awaiting an answer.
    #[instrument(skip(self, raw), fields(mode = %self.mode()))]
    pub fn submit_answer(&mut self, raw: &str) -> Option<AnswerOutcome> {
        let clue = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::AwaitingAnswer { clue } => clue,
            other => {
                self.state = other;
                debug!("Ignoring answer with no clue awaiting one");
                return None;
            }
        };

        let correct = fold_answer(raw) == fold_answer(clue.answer());
        let value = i64::from(clue.value());
        self.score += if correct { value } else { -value };

        let outcome = AnswerOutcome {
            correct,
            correct_answer: clue.answer().to_string(),
            value: clue.value(),
            new_score: self.score,
        };
        self.epoch += 1;
        let dismissal = PendingDismissal {
            ticket: DismissTicket(self.epoch),
            deadline: Instant::now() + self.result_delay,
        };
        info!(correct, score = self.score, "Answer scored");

        self.last_outcome = Some(outcome.clone());
        self.state = SessionState::ShowingResult {
            clue,
            outcome: outcome.clone(),
            dismissal,
        };
        Some(outcome)
    }

    /// Dismisses the shown result and re-arms the board.
    ///
    /// Returns false when no result is showing.
    #[instrument(skip(self), fields(mode = %self.mode()))]
    pub fn acknowledge_result(&mut self) -> bool {
        if !matches!(self.state, SessionState::ShowingResult { .. }) {
            debug!("Ignoring acknowledge with no result showing");
            return false;
        }
        self.state = SessionState::Idle;
        debug!("Result acknowledged");
        true
    }

    /// Fires a scheduled dismissal if `ticket` is still the current one.
    #[instrument(skip(self))]
    pub fn acknowledge_scheduled(&mut self, ticket: DismissTicket) -> bool {
        match self.pending_dismissal() {
            Some(pending) if pending.ticket == ticket => self.acknowledge_result(),
            _ => {
                debug!("Ignoring stale dismissal");
                false
            }
        }
    }

    /// Fires the pending dismissal when its deadline has passed.
    pub fn fire_due_dismissal(&mut self, now: Instant) -> bool {
        match self.pending_dismissal() {
            Some(pending) if now >= pending.deadline => self.acknowledge_scheduled(pending.ticket),
            _ => false,
        }
    }

    /// Returns the scheduled dismissal, if a result is showing.
    pub fn pending_dismissal(&self) -> Option<PendingDismissal> {
        match &self.state {
            SessionState::ShowingResult { dismissal, .. } => Some(*dismissal),
            _ => None,
        }
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        match self.state {
            SessionState::Idle => Mode::Idle,
            SessionState::AwaitingAnswer { .. } => Mode::AwaitingAnswer,
            SessionState::ShowingResult { .. } => Mode::ShowingResult,
        }
    }

    /// Returns the clue being answered or whose result is showing.
    pub fn active_clue(&self) -> Option<&Clue> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::AwaitingAnswer { clue } | SessionState::ShowingResult { clue, .. } => {
                Some(clue)
            }
        }
    }

    /// Returns the outcome currently on screen.
    pub fn shown_outcome(&self) -> Option<&AnswerOutcome> {
        match &self.state {
            SessionState::ShowingResult { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// Returns the most recent outcome of this session, shown or not.
    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        self.last_outcome.as_ref()
    }

    /// Returns the remaining board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current score.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Returns the delay before a shown result is dismissed.
    pub fn result_delay(&self) -> Duration {
        self.result_delay
    }

    /// Returns true once the board is empty and no clue is active.
    pub fn is_finished(&self) -> bool {
        self.board.is_empty() && matches!(self.state, SessionState::Idle)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_DELAY)
    }
}
