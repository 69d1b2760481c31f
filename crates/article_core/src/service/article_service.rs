//! Article use-case service.
//!
//! # Responsibility
//! - Provide get/create/aggregate entry points for the API layer.
//! - Wrap store failures with identifying context.
//!
//! # Invariants
//! - Error kinds pass through unchanged; the service never recovers or
//!   retries.
//! - The service holds no state of its own between calls.
//! - No field validation beyond what the store enforces.

use crate::error::ArticleError;
use crate::model::aggregate::TagDateAggregate;
use crate::model::article::{Article, CreateArticleInput};
use crate::repo::article_repo::ArticleRepository;
use crate::service::aggregate::aggregate_tag_by_date;
use log::{debug, warn};

/// Article service facade over store implementations.
pub struct ArticleService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> ArticleService<R> {
    /// Creates a service using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Underlying store.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Gets one article by id.
    ///
    /// # Errors
    /// - `NotFound` when no article has `id`.
    /// - `Unknown` when the store cannot be read.
    pub fn get(&self, id: &str) -> Result<Article, ArticleError> {
        match self.repo.get(id) {
            Ok(article) => {
                debug!("event=article_get module=service status=ok");
                Ok(article)
            }
            Err(err) => {
                let err = ArticleError::from(err).with_context(format!("get article `{id}`"));
                log_failure("article_get", &err);
                Err(err)
            }
        }
    }

    /// Creates one article.
    ///
    /// # Errors
    /// - `AlreadyExists` when `input.id` is taken.
    /// - `InvalidArgument` when the store rejects the record.
    /// - `Unknown` on persistence failure.
    pub fn create(&self, input: &CreateArticleInput) -> Result<(), ArticleError> {
        match self.repo.create(input) {
            Ok(()) => {
                debug!(
                    "event=article_create module=service status=ok tags={}",
                    input.tags.len()
                );
                Ok(())
            }
            Err(err) => {
                let err = ArticleError::from(err)
                    .with_context(format!("create article `{}`", input.id));
                log_failure("article_create", &err);
                Err(err)
            }
        }
    }

    /// Aggregates tag statistics across every article on `date`.
    ///
    /// `date` must already be in `YYYY-MM-DD` form.
    pub fn get_articles_by_tag_and_date(
        &self,
        tag_name: &str,
        date: &str,
    ) -> Result<TagDateAggregate, ArticleError> {
        let articles = self.repo.get_by_date(date).map_err(|err| {
            let err =
                ArticleError::from(err).with_context(format!("load articles for date `{date}`"));
            log_failure("tag_aggregate", &err);
            err
        })?;

        let aggregate = aggregate_tag_by_date(tag_name, &articles);
        debug!(
            "event=tag_aggregate module=service status=ok matched={} count={}",
            articles.len(),
            aggregate.count
        );
        Ok(aggregate)
    }
}

fn log_failure(event: &str, err: &ArticleError) {
    warn!(
        "event={} module=service status=error kind={} error={}",
        event,
        err.kind(),
        err
    );
}
