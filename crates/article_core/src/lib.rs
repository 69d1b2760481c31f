//! Core domain logic for the article API.
//! This crate is the single source of truth for article invariants and the
//! tag/date aggregation rules.

pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use error::{ArticleError, ErrorKind};
pub use logging::{default_log_level, init_logging};
pub use model::aggregate::TagDateAggregate;
pub use model::article::{Article, ArticleId, ArticleValidationError, CreateArticleInput};
pub use repo::article_repo::{ArticleRepository, RepoError, RepoResult};
pub use repo::json_file::JsonFileArticleRepository;
pub use repo::memory::InMemoryArticleRepository;
pub use service::aggregate::{aggregate_tag_by_date, MAX_AGGREGATE_ARTICLE_IDS};
pub use service::article_service::ArticleService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
