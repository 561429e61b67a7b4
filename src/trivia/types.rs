//! Core domain types for the trivia board.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::TriviaError;

/// Identifier of a category, unique within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

/// Identifier of a clue, unique within its category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ClueId(pub u64);

/// A single question/answer unit on the board.
///
/// Clues are immutable once built. Revealing one moves it off the board
/// and into the session's active state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    id: ClueId,
    value: u32,
    question: String,
    answer: String,
}

impl Clue {
    /// Creates a new clue.
    pub fn new(id: ClueId, value: u32, question: String, answer: String) -> Self {
        Self {
            id,
            value,
            question,
            answer,
        }
    }

    /// Returns the clue identifier.
    pub fn id(&self) -> ClueId {
        self.id
    }

    /// Returns the dollar value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns the normalized question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Returns the answer with its original casing.
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// A titled column of clues, ordered by ascending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    /// Creates a new category.
    pub fn new(id: CategoryId, title: String, clues: Vec<Clue>) -> Self {
        Self { id, title, clues }
    }

    /// Returns the category identifier.
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the remaining clues in value order.
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// The unrevealed clues of the current session.
///
/// Invariants:
/// - category ids are unique
/// - no category is ever empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBoard")]
pub struct Board {
    categories: Vec<Category>,
}

/// Wire shape of a board. Decoding goes through [`Board::new`].
#[derive(Deserialize)]
struct RawBoard {
    categories: Vec<Category>,
}

impl From<RawBoard> for Board {
    fn from(raw: RawBoard) -> Self {
        Board::new(raw.categories)
    }
}

impl Board {
    /// Builds a board, dropping empty categories and later duplicates of an id.
    #[instrument(skip(categories), fields(count = categories.len()))]
    pub fn new(categories: Vec<Category>) -> Self {
        let mut kept: Vec<Category> = Vec::with_capacity(categories.len());
        for category in categories {
            if category.clues.is_empty() {
                debug!(category_id = %category.id, "Dropping empty category");
                continue;
            }
            if kept.iter().any(|c| c.id == category.id) {
                debug!(category_id = %category.id, "Dropping duplicate category");
                continue;
            }
            kept.push(category);
        }
        Self { categories: kept }
    }

    /// Returns the remaining categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by id.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Returns true once every clue has been revealed.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Counts the clues still on the board.
    pub fn remaining_clues(&self) -> usize {
        self.categories.iter().map(|c| c.clues.len()).sum()
    }

    /// Removes a clue from the board, dropping its category if it empties.
    ///
    /// Nothing changes when either lookup misses.
    #[instrument(skip(self))]
    pub(crate) fn take_clue(
        &mut self,
        category_id: CategoryId,
        clue_id: ClueId,
    ) -> Result<Clue, TriviaError> {
        let not_found = || TriviaError::ClueNotFound {
            category_id,
            clue_id,
        };

        let category_index = self
            .categories
            .iter()
            .position(|c| c.id == category_id)
            .ok_or_else(not_found)?;
        let category = &mut self.categories[category_index];
        let clue_index = category
            .clues
            .iter()
            .position(|c| c.id == clue_id)
            .ok_or_else(not_found)?;

        let clue = category.clues.remove(clue_index);
        if category.clues.is_empty() {
            debug!(%category_id, "Last clue revealed, removing category");
            self.categories.remove(category_index);
        }
        Ok(clue)
    }
}
