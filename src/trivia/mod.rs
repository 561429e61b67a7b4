//! Trivia board: category selection, the session state machine and its boundary.

mod error;
mod game;
mod normalize;
mod provider;
mod session;
mod source;
mod types;

pub use error::{FetchError, TriviaError};
pub use game::TriviaGame;
pub use normalize::{fold_answer, sanitize_question, sanitize_title};
pub use provider::{BoardShape, CategoryProvider, VALUE_STEP, build_category, choose_category_ids};
pub use session::{
    AnswerOutcome, DEFAULT_RESULT_DELAY, DismissTicket, GameSession, Mode, PendingDismissal,
};
pub use source::{CategoryDetail, CategorySource, CategorySummary, HttpCategorySource, RawClue};
pub use types::{Board, Category, CategoryId, Clue, ClueId};
