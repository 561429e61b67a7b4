//! In-memory category source shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use strictly_trivia::{
    Board, CategoryDetail, CategoryId, CategorySource, CategorySummary, FetchError, RawClue,
    TriviaError, build_category,
};

/// Category source answering from fixed data.
#[derive(Debug, Default)]
pub struct StaticSource {
    pub listing: Vec<CategorySummary>,
    pub details: HashMap<CategoryId, CategoryDetail>,
    pub fail_listing: AtomicBool,
    pub fail_detail: Option<CategoryId>,
    pub listing_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub requested_count: Mutex<Option<usize>>,
}

impl StaticSource {
    /// Adds a category whose clues are `"question {id}-{n}"` / `"Answer {id}-{n}"`.
    pub fn with_category(mut self, id: u64, title: &str, clue_count: usize) -> Self {
        let clues = (0..clue_count)
            .map(|n| {
                RawClue::new(
                    (id * 1000 + n as u64).into(),
                    format!("question {}-{}", id, n),
                    format!("Answer {}-{}", id, n),
                )
            })
            .collect();
        self.listing
            .push(CategorySummary::new(CategoryId(id), clue_count, title));
        self.details
            .insert(CategoryId(id), CategoryDetail::new(title, clues));
        self
    }

    /// Builds a source with `count` categories of `clues` clues each.
    pub fn uniform(count: u64, clues: usize) -> Self {
        (1..=count).fold(Self::default(), |source, id| {
            source.with_category(id, &format!("category {}", id), clues)
        })
    }
}

#[async_trait::async_trait]
impl CategorySource for StaticSource {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, TriviaError> {
        self.listing_calls.fetch_add(1, Ordering::SeqCst);
        *self.requested_count.lock().expect("lock poisoned") = Some(count);
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(FetchError::new("listing unavailable").into());
        }
        Ok(self.listing.clone())
    }

    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryDetail, TriviaError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_detail == Some(id) {
            return Err(FetchError::new(format!("category {} unavailable", id)).into());
        }
        self.details
            .get(&id)
            .cloned()
            .ok_or_else(|| FetchError::new(format!("no category {}", id)).into())
    }
}

/// Builds a board straight from fixed data, one category per entry.
pub fn board_of(categories: &[(u64, &[(&str, &str)])]) -> Board {
    let built = categories
        .iter()
        .map(|(id, clues)| {
            let raw = clues
                .iter()
                .enumerate()
                .map(|(n, (q, a))| RawClue::new((id * 1000 + n as u64).into(), *q, *a))
                .collect();
            build_category(
                CategoryId(*id),
                CategoryDetail::new(format!("category {}", id), raw),
                clues.len(),
            )
            .expect("valid fixture category")
        })
        .collect();
    Board::new(built)
}
