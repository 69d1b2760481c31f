//! In-memory article store.
//!
//! Same contract as the file store, without durability. Used where a
//! throwaway store is enough, e.g. service and HTTP tests.

use crate::model::article::{Article, CreateArticleInput};
use crate::repo::article_repo::{id_already_exists, ArticleRepository, RepoError, RepoResult};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: Mutex<Vec<Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with `articles` in the given order.
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
        }
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Vec<Article>>> {
        self.articles.lock().map_err(|_| RepoError::LockPoisoned)
    }
}

impl ArticleRepository for InMemoryArticleRepository {
    fn get(&self, id: &str) -> RepoResult<Article> {
        self.lock()?
            .iter()
            .find(|article| article.id == id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }

    fn get_by_date(&self, date: &str) -> RepoResult<Vec<Article>> {
        Ok(self
            .lock()?
            .iter()
            .filter(|article| article.date == date)
            .cloned()
            .collect())
    }

    fn create(&self, input: &CreateArticleInput) -> RepoResult<()> {
        input.validate()?;
        let mut articles = self.lock()?;
        if id_already_exists(&articles, &input.id) {
            return Err(RepoError::AlreadyExists(input.id.clone()));
        }
        articles.push(input.clone().into_article());
        Ok(())
    }

    fn list(&self) -> RepoResult<Vec<Article>> {
        Ok(self.lock()?.clone())
    }
}
