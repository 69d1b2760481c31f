//! HTTP API layer for articles.
//!
//! # Responsibility
//! - Route article and tag requests to the article service.
//! - Own request validation and error-kind to status mapping.
//!
//! # Invariants
//! - Only this crate turns error kinds into transport statuses.
//! - Handler panics are answered with a 500 `internal error` body.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use article_core::{ArticleRepository, ArticleService};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

pub use dto::{ArticlesByTagAndDateResponse, CreateArticleRequest, HealthResponse};
pub use error::{ApiError, ErrorResponse, INTERNAL_ERROR_MESSAGE};
pub use handlers::AppState;

/// Builds the application router over `service`.
pub fn router<R>(service: Arc<ArticleService<R>>) -> Router
where
    R: ArticleRepository + Send + Sync + 'static,
{
    let state = AppState { service };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/articles", post(handlers::create_article::<R>))
        .route("/articles/{id}", get(handlers::get_article::<R>))
        .route(
            "/tags/{tag_name}/{date}",
            get(handlers::get_articles_by_tag_and_date::<R>),
        )
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .with_state(state)
}
