//! Session boundary: wires a provider to a session and absorbs interaction failures.

use tokio::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use super::error::TriviaError;
use super::provider::CategoryProvider;
use super::session::{AnswerOutcome, GameSession, Mode};
use super::source::CategorySource;
use super::types::{CategoryId, ClueId};

/// A trivia game: a board provider plus the running session.
#[derive(Debug)]
pub struct TriviaGame<S> {
    provider: CategoryProvider<S>,
    session: GameSession,
    started: bool,
}

impl<S: CategorySource> TriviaGame<S> {
    /// Creates a game that has not started yet.
    pub fn new(provider: CategoryProvider<S>, result_delay: Duration) -> Self {
        Self {
            provider,
            session: GameSession::new(result_delay),
            started: false,
        }
    }

    /// Fetches a fresh board and starts a new session on it.
    ///
    /// On failure nothing is installed: the previous session, or the
    /// never-started state, is left exactly as it was.
    #[instrument(skip(self), fields(restart = self.started))]
    pub async fn new_game(&mut self) -> Result<(), TriviaError> {
        info!("Selecting board for new game");
        let board = match self.provider.select_categories().await {
            Ok(board) => board,
            Err(e) => {
                warn!(error = %e, "Game start failed");
                return Err(e);
            }
        };
        self.session.start(board);
        self.started = true;
        Ok(())
    }

    /// Opens a clue, returning whether one opened.
    ///
    /// Missing clues and opens outside [`Mode::Idle`] are logged and dropped.
    #[instrument(skip(self))]
    pub fn open_clue(&mut self, category_id: CategoryId, clue_id: ClueId) -> bool {
        match self.session.open_clue(category_id, clue_id) {
            Ok(Some(_)) => true,
            Ok(None) => {
                debug!(mode = %self.session.mode(), "Open ignored");
                false
            }
            Err(e) => {
                warn!(error = %e, "Open rejected");
                false
            }
        }
    }

    /// Submits an answer for the active clue.
    pub fn submit_answer(&mut self, raw: &str) -> Option<AnswerOutcome> {
        self.session.submit_answer(raw)
    }

    /// Dismisses the shown result before its delay runs out.
    pub fn dismiss_result(&mut self) -> bool {
        self.session.acknowledge_result()
    }

    /// Fires the scheduled dismissal if it is due at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = self.session.fire_due_dismissal(now);
        if fired {
            debug!("Scheduled dismissal fired");
        }
        fired
    }

    /// Returns whether a board has ever been installed.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Returns the running session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    /// Returns the board provider.
    pub fn provider(&self) -> &CategoryProvider<S> {
        &self.provider
    }
}
