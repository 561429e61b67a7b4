//! Error types for category selection and clue interaction.

use derive_more::{Display, Error};
use tracing::instrument;

use super::types::{CategoryId, ClueId};

/// Failure fetching or decoding category data, with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Fetch error: {} at {}:{}", message, file, line)]
pub struct FetchError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl FetchError {
    /// Creates a new fetch error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("HTTP error: {}", err))
    }
}

/// Error surfaced by the category provider or the game session.
#[derive(Debug, Clone, Display, Error)]
pub enum TriviaError {
    /// Too few categories have enough clues to fill the board.
    #[display("Need {} categories with enough clues, only {} qualify", required, available)]
    InsufficientCategories {
        /// Categories the board needs.
        required: usize,
        /// Categories that qualified.
        available: usize,
    },

    /// The requested clue is not on the board (already revealed or stale).
    #[display("Clue {} not found in category {}", clue_id, category_id)]
    ClueNotFound {
        /// Category that was looked up.
        category_id: CategoryId,
        /// Clue that was looked up.
        clue_id: ClueId,
    },

    /// An external fetch failed or returned malformed data.
    #[display("{}", _0)]
    Fetch(#[error(not(source))] FetchError),
}

impl From<FetchError> for TriviaError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err)
    }
}

impl From<reqwest::Error> for TriviaError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(FetchError::from(err))
    }
}
