//! External category data: wire types and the HTTP source.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::error::{FetchError, TriviaError};
use super::types::{CategoryId, ClueId};

/// One entry of the category listing.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category id.
    id: CategoryId,
    /// Number of clues the source claims the category holds.
    clues_count: usize,
    /// Raw category title.
    title: String,
}

impl CategorySummary {
    /// Creates a listing entry.
    pub fn new(id: CategoryId, clues_count: usize, title: impl Into<String>) -> Self {
        Self {
            id,
            clues_count,
            title: title.into(),
        }
    }
}

/// A raw clue as the source returns it. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RawClue {
    /// Clue id.
    id: ClueId,
    /// Raw question text.
    question: String,
    /// Raw answer text.
    answer: String,
}

impl RawClue {
    /// Creates a raw clue.
    pub fn new(id: ClueId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Full contents of one category.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CategoryDetail {
    /// Raw category title.
    title: String,
    /// Clues in the source's natural order.
    clues: Vec<RawClue>,
}

impl CategoryDetail {
    /// Creates a category detail.
    pub fn new(title: impl Into<String>, clues: Vec<RawClue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }
}

/// Where category listings and details come from.
#[async_trait::async_trait]
pub trait CategorySource: Send + Sync {
    /// Fetches up to `count` category listing entries.
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, TriviaError>;

    /// Fetches the full clue list of one category.
    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryDetail, TriviaError>;
}

/// Category source backed by the public trivia REST API.
#[derive(Debug, Clone)]
pub struct HttpCategorySource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCategorySource {
    /// Creates a source rooted at `base_url` (no trailing slash needed).
    #[instrument(skip_all, fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        info!("Creating HTTP category source");
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self))]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, url, "Request failed");
            return Err(FetchError::new(format!("GET {} returned {}", url, status)));
        }
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| FetchError::new(format!("Malformed response from {}: {}", url, e)))
    }
}

#[async_trait::async_trait]
impl CategorySource for HttpCategorySource {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, TriviaError> {
        let url = format!("{}/api/categories?count={}", self.base_url, count);
        let listing: Vec<CategorySummary> = self.get_json(&url).await?;
        debug!(entries = listing.len(), "Fetched category listing");
        Ok(listing)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryDetail, TriviaError> {
        let url = format!("{}/api/category?id={}", self.base_url, id);
        let detail: CategoryDetail = self.get_json(&url).await?;
        debug!(title = %detail.title, clues = detail.clues.len(), "Fetched category");
        Ok(detail)
    }
}
