//! API error envelope and status mapping.
//!
//! # Responsibility
//! - Turn domain error kinds into HTTP status codes.
//! - Hide internal details for failures that are not domain errors.
//!
//! # Invariants
//! - Response body is always `{"error": "<message>"}`.
//! - Non-domain failures always render as 500 `internal error`.

use article_core::{ArticleError, ErrorKind};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use tokio::task::JoinError;

/// Message shown for failures that are not domain errors.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

/// Error response body sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure returned by HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Kind-tagged domain error; its message is shown to the client.
    Domain(ArticleError),
    /// Anything else. Details are logged, never shown.
    Internal(String),
}

impl ApiError {
    /// Shorthand for a client-side validation failure.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::Domain(ArticleError::new(ErrorKind::InvalidArgument, message))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(err) => status_for_kind(err.kind()),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Maps a domain kind to its transport status.
pub fn status_for_kind(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorKind::AlreadyExists | ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(err) => write!(f, "{err}"),
            Self::Internal(details) => write!(f, "internal failure: {details}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ArticleError> for ApiError {
    fn from(value: ArticleError) -> Self {
        Self::Domain(value)
    }
}

impl From<JoinError> for ApiError {
    fn from(value: JoinError) -> Self {
        Self::Internal(format!("blocking task failed: {value}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Domain(err) => err.to_string(),
            Self::Internal(details) => {
                error!(
                    "event=http_internal_error module=http status=error error={}",
                    details
                );
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
