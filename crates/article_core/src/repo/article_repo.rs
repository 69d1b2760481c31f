//! Article store contract and shared error type.
//!
//! # Responsibility
//! - Define point lookup, date lookup and create operations.
//! - Map persistence failures to semantic error variants.
//!
//! # Invariants
//! - `get_by_date` uses exact string equality and returns an empty vec (not
//!   an error) when nothing matches.
//! - `create` never overwrites an existing id.

use crate::error::ErrorKind;
use crate::model::article::{Article, ArticleId, ArticleValidationError, CreateArticleInput};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Store error for article persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ArticleValidationError),
    NotFound(ArticleId),
    AlreadyExists(ArticleId),
    Io(std::io::Error),
    Json(serde_json::Error),
    /// A writer panicked while holding the store lock.
    LockPoisoned,
}

impl RepoError {
    /// Domain kind this store error surfaces as.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::Validation(_) => ErrorKind::InvalidArgument,
            Self::Io(_) | Self::Json(_) | Self::LockPoisoned => ErrorKind::Unknown,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "no article found with id: {id}"),
            Self::AlreadyExists(id) => write!(f, "article already exists with id: {id}"),
            Self::Io(err) => write!(f, "article store io failed: {err}"),
            Self::Json(err) => write!(f, "invalid persisted article data: {err}"),
            Self::LockPoisoned => write!(f, "article store lock poisoned"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::NotFound(_) | Self::AlreadyExists(_) | Self::LockPoisoned => None,
        }
    }
}

impl From<ArticleValidationError> for RepoError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Store interface for article operations.
pub trait ArticleRepository {
    /// Gets one article by id. Returns `NotFound` on miss.
    fn get(&self, id: &str) -> RepoResult<Article>;
    /// Returns every article whose `date` equals `date` exactly, in store order.
    fn get_by_date(&self, date: &str) -> RepoResult<Vec<Article>>;
    /// Adds one article. Returns `AlreadyExists` when `id` is taken.
    fn create(&self, input: &CreateArticleInput) -> RepoResult<()>;
    /// Returns the full collection in store order.
    fn list(&self) -> RepoResult<Vec<Article>>;
}

/// Returns whether `id` is already used by one of `articles`.
pub fn id_already_exists(articles: &[Article], id: &str) -> bool {
    articles.iter().any(|article| article.id == id)
}

#[cfg(test)]
mod tests {
    use super::{id_already_exists, RepoError};
    use crate::error::ErrorKind;
    use crate::model::article::{Article, ArticleValidationError};

    fn article(id: &str) -> Article {
        Article {
            id: id.to_string(),
            title: "t".to_string(),
            date: "2021-01-01".to_string(),
            body: String::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn id_already_exists_matches_exact_ids() {
        let articles = vec![article("1"), article("2"), article("3")];
        assert!(id_already_exists(&articles, "3"));
        assert!(!id_already_exists(&articles, "4"));
    }

    #[test]
    fn repo_error_kinds_follow_semantic_variant() {
        assert_eq!(
            RepoError::NotFound("1".to_string()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            RepoError::AlreadyExists("1".to_string()).kind(),
            ErrorKind::AlreadyExists
        );
        assert_eq!(
            RepoError::Validation(ArticleValidationError::EmptyTitle).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(RepoError::LockPoisoned.kind(), ErrorKind::Unknown);
    }
}
