//! Terminal app state: board cursor, answer box and status line.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::time::Instant;
use tracing::{debug, info, instrument};

use crate::trivia::{CategoryId, CategorySource, ClueId, Mode, TriviaGame};

/// Feedback shown after a correct answer.
pub const CORRECT_FEEDBACK: &str = "Correct! Good job!";

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Nothing beyond redrawing.
    None,
    /// Fetch a fresh board and start over.
    NewGame,
    /// Leave the app.
    Quit,
}

/// Status line contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Before the first game.
    Welcome,
    /// A board is being fetched.
    Loading,
    /// The last game start failed.
    Failed(String),
    /// A game is running.
    Playing,
}

/// Terminal app wrapping a [`TriviaGame`].
#[derive(Debug)]
pub struct TriviaApp<S> {
    game: TriviaGame<S>,
    cursor: (usize, usize),
    answer_input: String,
    status: Status,
}

impl<S: CategorySource> TriviaApp<S> {
    /// Creates the app around a game that has not started.
    pub fn new(game: TriviaGame<S>) -> Self {
        Self {
            game,
            cursor: (0, 0),
            answer_input: String::new(),
            status: Status::Welcome,
        }
    }

    /// Maps a key press to a state change or a loop command.
    #[instrument(skip(self), fields(mode = %self.game.mode()))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppCommand::Quit;
        }
        if matches!(self.status, Status::Failed(_)) && self.game.started() {
            // A failed restart leaves the previous game running.
            self.status = Status::Playing;
        }

        match self.game.mode() {
            Mode::AwaitingAnswer => {
                self.handle_answer_key(key.code);
                AppCommand::None
            }
            Mode::ShowingResult => match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    self.game.dismiss_result();
                    self.clamp_cursor();
                    AppCommand::None
                }
                KeyCode::Char('q') => AppCommand::Quit,
                KeyCode::Char('n') => AppCommand::NewGame,
                _ => AppCommand::None,
            },
            Mode::Idle => self.handle_board_key(key.code),
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) -> AppCommand {
        let (col, row) = self.cursor;
        match code {
            KeyCode::Char('q') => return AppCommand::Quit,
            KeyCode::Char('n') => return AppCommand::NewGame,
            KeyCode::Left | KeyCode::Char('h') => self.cursor = (col.saturating_sub(1), row),
            KeyCode::Right | KeyCode::Char('l') => self.cursor = (col + 1, row),
            KeyCode::Up | KeyCode::Char('k') => self.cursor = (col, row.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.cursor = (col, row + 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some((category_id, clue_id)) = self.selected_cell() {
                    self.answer_input.clear();
                    self.game.open_clue(category_id, clue_id);
                }
            }
            _ => {}
        }
        self.clamp_cursor();
        AppCommand::None
    }

    fn handle_answer_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                let answer = std::mem::take(&mut self.answer_input);
                if let Some(outcome) = self.game.submit_answer(&answer) {
                    debug!(correct = outcome.correct, "Answer submitted");
                }
                self.clamp_cursor();
            }
            KeyCode::Backspace => {
                self.answer_input.pop();
            }
            KeyCode::Char(c) => self.answer_input.push(c),
            _ => {}
        }
    }

    /// Marks the app as loading a board.
    pub fn begin_loading(&mut self) {
        self.status = Status::Loading;
    }

    /// Starts a new game, recording a failure in the status line.
    #[instrument(skip(self))]
    pub async fn new_game(&mut self) {
        self.status = Status::Loading;
        match self.game.new_game().await {
            Ok(()) => {
                info!("Board ready");
                self.status = Status::Playing;
                self.cursor = (0, 0);
                self.answer_input.clear();
            }
            Err(e) => {
                self.status = Status::Failed(e.to_string());
            }
        }
    }

    /// Advances scheduled transitions.
    pub fn tick(&mut self, now: Instant) {
        if self.game.tick(now) {
            self.clamp_cursor();
        }
    }

    /// Returns the clue under the cursor.
    pub fn selected_cell(&self) -> Option<(CategoryId, ClueId)> {
        let (col, row) = self.cursor;
        let category = self.game.session().board().categories().get(col)?;
        let clue = category.clues().get(row)?;
        Some((category.id(), clue.id()))
    }

    fn clamp_cursor(&mut self) {
        let categories = self.game.session().board().categories();
        if categories.is_empty() {
            self.cursor = (0, 0);
            return;
        }
        let col = self.cursor.0.min(categories.len() - 1);
        let rows = categories[col].clues().len();
        let row = self.cursor.1.min(rows.saturating_sub(1));
        self.cursor = (col, row);
    }

    /// Returns the cursor as (column, row).
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Returns the text typed into the answer box.
    pub fn answer_input(&self) -> &str {
        &self.answer_input
    }

    /// Returns the status line state.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the wrapped game.
    pub fn game(&self) -> &TriviaGame<S> {
        &self.game
    }

    /// Label for the new-game key hint.
    pub fn play_label(&self) -> &'static str {
        if self.game.started() {
            "Restart the Game!"
        } else {
            "Start the Game!"
        }
    }

    /// Feedback line for the result on screen.
    pub fn feedback(&self) -> Option<String> {
        self.game.session().shown_outcome().map(|outcome| {
            if outcome.correct {
                CORRECT_FEEDBACK.to_string()
            } else {
                format!("Incorrect. The correct answer was: {}", outcome.correct_answer)
            }
        })
    }
}
