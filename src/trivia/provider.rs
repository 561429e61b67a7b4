//! Random board selection from an external category source.

use futures::future::try_join_all;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

use super::error::{FetchError, TriviaError};
use super::normalize::{sanitize_question, sanitize_title};
use super::source::{CategoryDetail, CategorySource, CategorySummary};
use super::types::{Board, Category, CategoryId, Clue};

/// Dollar step between consecutive clues of a category.
pub const VALUE_STEP: u32 = 100;

/// Dimensions of a board: columns and clues per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardShape {
    /// Number of categories on the board.
    pub categories: usize,
    /// Number of clues taken from each category.
    pub clues_per_category: usize,
}

impl BoardShape {
    /// Creates a board shape.
    pub fn new(categories: usize, clues_per_category: usize) -> Self {
        Self {
            categories,
            clues_per_category,
        }
    }

    /// Total clues a full board holds.
    pub fn total_clues(&self) -> usize {
        self.categories * self.clues_per_category
    }
}

impl Default for BoardShape {
    fn default() -> Self {
        Self::new(6, 5)
    }
}

/// Picks `shape.categories` ids uniformly at random among qualifying entries.
///
/// An entry qualifies when it claims at least `shape.clues_per_category`
/// clues. Repeated ids in the listing count once.
#[instrument(skip(summaries, rng), fields(listed = summaries.len()))]
pub fn choose_category_ids<R: Rng + ?Sized>(
    summaries: &[CategorySummary],
    shape: BoardShape,
    rng: &mut R,
) -> Result<Vec<CategoryId>, TriviaError> {
    let mut seen = HashSet::new();
    let qualifying: Vec<CategoryId> = summaries
        .iter()
        .filter(|s| *s.clues_count() >= shape.clues_per_category)
        .map(|s| *s.id())
        .filter(|id| seen.insert(*id))
        .collect();

    if qualifying.len() < shape.categories {
        warn!(
            required = shape.categories,
            available = qualifying.len(),
            "Not enough qualifying categories"
        );
        return Err(TriviaError::InsufficientCategories {
            required: shape.categories,
            available: qualifying.len(),
        });
    }

    let chosen: Vec<CategoryId> = qualifying
        .choose_multiple(rng, shape.categories)
        .copied()
        .collect();
    debug!(?chosen, "Chose categories");
    Ok(chosen)
}

/// Shapes a fetched category into a board column.
///
/// Takes the first `clues_per_category` clues, assigns values by position and
/// normalizes the title and questions.
#[instrument(skip(detail), fields(title = %detail.title()))]
pub fn build_category(
    id: CategoryId,
    detail: CategoryDetail,
    clues_per_category: usize,
) -> Result<Category, TriviaError> {
    let (title, raw_clues) = (detail.title().clone(), detail.clues());
    if raw_clues.len() < clues_per_category {
        return Err(FetchError::new(format!(
            "Category {} returned {} clues, expected at least {}",
            id,
            raw_clues.len(),
            clues_per_category
        ))
        .into());
    }

    let mut seen = HashSet::new();
    let mut clues = Vec::with_capacity(clues_per_category);
    for (raw, position) in raw_clues.iter().take(clues_per_category).zip(1u32..) {
        if !seen.insert(*raw.id()) {
            return Err(FetchError::new(format!(
                "Category {} repeats clue id {}",
                id,
                raw.id()
            ))
            .into());
        }
        clues.push(Clue::new(
            *raw.id(),
            position * VALUE_STEP,
            sanitize_question(raw.question()),
            raw.answer().clone(),
        ));
    }

    Ok(Category::new(id, sanitize_title(&title), clues))
}

/// Builds fresh boards from a [`CategorySource`].
#[derive(Debug, Clone)]
pub struct CategoryProvider<S> {
    source: S,
    shape: BoardShape,
    listing_count: usize,
}

impl<S: CategorySource> CategoryProvider<S> {
    /// Creates a provider that requests `listing_count` listing entries.
    pub fn new(source: S, shape: BoardShape, listing_count: usize) -> Self {
        Self {
            source,
            shape,
            listing_count,
        }
    }

    /// Returns the board shape this provider builds.
    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Selects a random, normalized board.
    ///
    /// Either every detail fetch succeeds and a full board is returned, or
    /// the first failure is returned and no board exists.
    #[instrument(skip(self), fields(shape = ?self.shape))]
    pub async fn select_categories(&self) -> Result<Board, TriviaError> {
        let listing = self.source.list_categories(self.listing_count).await?;
        let ids = {
            let mut rng = rand::thread_rng();
            choose_category_ids(&listing, self.shape, &mut rng)?
        };
        self.fetch_board(&ids).await
    }

    /// Like [`Self::select_categories`], drawing from the given RNG.
    #[instrument(skip(self, rng), fields(shape = ?self.shape))]
    pub async fn select_categories_with<R: Rng + Send>(
        &self,
        rng: &mut R,
    ) -> Result<Board, TriviaError> {
        let listing = self.source.list_categories(self.listing_count).await?;
        let ids = choose_category_ids(&listing, self.shape, rng)?;
        self.fetch_board(&ids).await
    }

    async fn fetch_board(&self, ids: &[CategoryId]) -> Result<Board, TriviaError> {
        let clues_per_category = self.shape.clues_per_category;
        let categories = try_join_all(ids.iter().map(|&id| async move {
            let detail = self.source.fetch_category(id).await?;
            build_category(id, detail, clues_per_category)
        }))
        .await?;

        info!(
            categories = categories.len(),
            clues = self.shape.total_clues(),
            "Board selected"
        );
        Ok(Board::new(categories))
    }
}
