//! Flat JSON file article store.
//!
//! # Responsibility
//! - Persist the whole article collection as one JSON array file.
//! - Serialize read-modify-write on create behind a single-writer lock.
//!
//! # Invariants
//! - Every operation re-reads the file; no in-process cache.
//! - `create` rewrites the full collection through a sibling temp file and
//!   an atomic rename, so readers never observe a partial file.
//! - A missing file reads as an empty collection.

use crate::model::article::{Article, CreateArticleInput};
use crate::repo::article_repo::{id_already_exists, ArticleRepository, RepoError, RepoResult};
use log::{debug, error, info};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

/// Article store backed by a local JSON file.
pub struct JsonFileArticleRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileArticleRepository {
    /// Creates a store over `path`. The file is not touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_articles(&self) -> RepoResult<Vec<Article>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == IoErrorKind::NotFound => {
                debug!(
                    "event=repo_read module=repo status=missing path={}",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save_articles(&self, articles: &[Article]) -> RepoResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let encoded = serde_json::to_vec_pretty(articles)?;
        let tmp_path = temp_path_for(&self.path);
        fs::write(&tmp_path, encoded)?;
        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }

    /// Read-modify-write of the whole collection. Caller holds `write_lock`.
    fn append_article(&self, input: &CreateArticleInput) -> RepoResult<usize> {
        let mut articles = self.read_articles()?;
        if id_already_exists(&articles, &input.id) {
            return Err(RepoError::AlreadyExists(input.id.clone()));
        }
        articles.push(input.clone().into_article());
        self.save_articles(&articles)?;
        Ok(articles.len())
    }
}

impl ArticleRepository for JsonFileArticleRepository {
    fn get(&self, id: &str) -> RepoResult<Article> {
        self.read_articles()?
            .into_iter()
            .find(|article| article.id == id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }

    fn get_by_date(&self, date: &str) -> RepoResult<Vec<Article>> {
        let matching = self
            .read_articles()?
            .into_iter()
            .filter(|article| article.date == date)
            .collect();
        Ok(matching)
    }

    fn create(&self, input: &CreateArticleInput) -> RepoResult<()> {
        input.validate()?;

        let started_at = Instant::now();
        let _guard = self.write_lock.lock().map_err(|_| RepoError::LockPoisoned)?;

        match self.append_article(input) {
            Ok(total) => {
                info!(
                    "event=repo_create module=repo status=ok total={} duration_ms={}",
                    total,
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=repo_create module=repo status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn list(&self) -> RepoResult<Vec<Article>> {
        self.read_articles()
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(".tmp");
    PathBuf::from(raw)
}
