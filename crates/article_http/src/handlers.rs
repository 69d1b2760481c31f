//! HTTP handlers for article routes.
//!
//! # Responsibility
//! - Decode path/body input, validate shape, call the article service.
//! - Run store-bound service calls off the async worker threads.
//!
//! # Invariants
//! - Handlers never touch the store directly.
//! - Every failure is returned as `ApiError`.

use crate::dto::{
    to_hyphenated_date, ArticlesByTagAndDateResponse, CreateArticleRequest, HealthResponse,
    INVALID_BODY_MESSAGE, INVALID_DATE_MESSAGE,
};
use crate::error::ApiError;
use article_core::{core_version, Article, ArticleError, ArticleRepository, ArticleService};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use log::debug;
use std::sync::Arc;

/// Shared handler dependencies.
pub struct AppState<R: ArticleRepository> {
    pub service: Arc<ArticleService<R>>,
}

impl<R: ArticleRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: core_version().to_string(),
    })
}

/// `GET /articles/{id}`
pub async fn get_article<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<Article>, ApiError>
where
    R: ArticleRepository + Send + Sync + 'static,
{
    let article = run_blocking(&state, move |service| service.get(&id)).await?;
    Ok(Json(article))
}

/// `POST /articles`
///
/// The body is decoded as JSON regardless of `Content-Type`.
///
/// - **201 Created**: article stored, empty body
/// - **400 Bad Request**: undecodable body, missing field, bad date
/// - **500 Internal Server Error**: duplicate id or store failure
pub async fn create_article<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<StatusCode, ApiError>
where
    R: ArticleRepository + Send + Sync + 'static,
{
    let request = serde_json::from_slice::<CreateArticleRequest>(&body).map_err(|err| {
        debug!(
            "event=http_decode module=http status=rejected line={} column={} category={:?}",
            err.line(),
            err.column(),
            err.classify()
        );
        ApiError::invalid_argument(INVALID_BODY_MESSAGE)
    })?;
    let input = request.into_input()?;

    run_blocking(&state, move |service| service.create(&input)).await?;
    Ok(StatusCode::CREATED)
}

/// `GET /tags/{tag_name}/{date}` where `date` is `YYYYMMDD`.
pub async fn get_articles_by_tag_and_date<R>(
    State(state): State<AppState<R>>,
    Path((tag_name, date)): Path<(String, String)>,
) -> Result<Json<ArticlesByTagAndDateResponse>, ApiError>
where
    R: ArticleRepository + Send + Sync + 'static,
{
    let date =
        to_hyphenated_date(&date).ok_or_else(|| ApiError::invalid_argument(INVALID_DATE_MESSAGE))?;

    let aggregate = run_blocking(&state, move |service| {
        service.get_articles_by_tag_and_date(&tag_name, &date)
    })
    .await?;
    Ok(Json(aggregate.into()))
}

/// Runs a synchronous service call on the blocking pool.
async fn run_blocking<R, T, F>(state: &AppState<R>, f: F) -> Result<T, ApiError>
where
    R: ArticleRepository + Send + Sync + 'static,
    T: Send + 'static,
    F: FnOnce(&ArticleService<R>) -> Result<T, ArticleError> + Send + 'static,
{
    let service = Arc::clone(&state.service);
    let result = tokio::task::spawn_blocking(move || f(&service)).await?;
    Ok(result?)
}
