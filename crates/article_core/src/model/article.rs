//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical article record and its creation input.
//! - Provide write-path validation shared by every store implementation.
//!
//! # Invariants
//! - `id` is assigned by the client and never reused for another article.
//! - `id` and `title` are never empty for a persisted article. Whitespace-only
//!   values are accepted.
//! - `date` is kept as the caller-provided `YYYY-MM-DD` string; lookups use
//!   exact string equality.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Client-assigned stable identifier of an article.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ArticleId = String;

/// Canonical article record.
///
/// Serialized field names match the persisted JSON file and the HTTP wire
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    pub body: String,
    /// Free-form labels. Order is preserved on read.
    pub tags: Vec<String>,
}

/// Input shape for creating one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateArticleInput {
    pub id: ArticleId,
    pub title: String,
    pub date: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl CreateArticleInput {
    /// Validates the input against article write-path invariants.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is empty.
    /// - `EmptyTitle` when `title` is empty.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        if self.id.is_empty() {
            return Err(ArticleValidationError::EmptyId);
        }
        if self.title.is_empty() {
            return Err(ArticleValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Converts this input into the record that will be persisted.
    pub fn into_article(self) -> Article {
        Article {
            id: self.id,
            title: self.title,
            date: self.date,
            body: self.body,
            tags: self.tags,
        }
    }
}

impl From<Article> for CreateArticleInput {
    fn from(value: Article) -> Self {
        Self {
            id: value.id,
            title: value.title,
            date: value.date,
            body: value.body,
            tags: value.tags,
        }
    }
}

/// Validation error for article write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleValidationError {
    /// `id` is the empty string.
    EmptyId,
    /// `title` is the empty string.
    EmptyTitle,
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "article id cannot be empty"),
            Self::EmptyTitle => write!(f, "article title cannot be empty"),
        }
    }
}

impl Error for ArticleValidationError {}
