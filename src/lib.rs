//! Strictly Trivia library - a guarded trivia board session
//!
//! Fetches categories from a remote clue API, builds a normalized board and
//! drives a single-active-clue answer cycle with scoring.
//!
//! # Architecture
//!
//! - **Provider**: random board selection over a [`CategorySource`]
//! - **Session**: board, active-clue state machine and score
//! - **Game**: session boundary that logs and drops interaction failures
//! - **TUI**: terminal render and input sinks
//!
//! # Example
//!
//! ```no_run
//! use strictly_trivia::{BoardShape, CategoryProvider, HttpCategorySource, TriviaGame};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), strictly_trivia::TriviaError> {
//! let source = HttpCategorySource::new("https://rithm-jeopardy.herokuapp.com");
//! let provider = CategoryProvider::new(source, BoardShape::default(), 100);
//! let mut game = TriviaGame::new(provider, Duration::from_millis(3000));
//! game.new_game().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod trivia;
mod tui;

// Crate-level exports - Configuration
pub use config::{API_URL_ENV, ConfigError, GameConfig};

// Crate-level exports - Trivia domain
pub use trivia::{
    AnswerOutcome, Board, BoardShape, Category, CategoryDetail, CategoryId, CategoryProvider,
    CategorySource, CategorySummary, Clue, ClueId, DEFAULT_RESULT_DELAY, DismissTicket,
    FetchError, GameSession, HttpCategorySource, Mode, PendingDismissal, RawClue, TriviaError,
    TriviaGame, VALUE_STEP, build_category, choose_category_ids, fold_answer, sanitize_question,
    sanitize_title,
};

// Crate-level exports - Terminal UI
pub use tui::{AppCommand, CORRECT_FEEDBACK, Status, TriviaApp, run_tui};
