//! Request logging and panic recovery.

use crate::error::ApiError;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use log::{info, warn};
use std::any::Any;
use std::time::Instant;

/// Logs one metadata-only event per request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = started_at.elapsed().as_millis();
    if status.is_server_error() {
        warn!(
            "event=http_request module=http status={} method={} path={} duration_ms={}",
            status.as_u16(),
            method,
            path,
            duration_ms
        );
    } else {
        info!(
            "event=http_request module=http status={} method={} path={} duration_ms={}",
            status.as_u16(),
            method,
            path,
            duration_ms
        );
    }
    response
}

/// Converts a handler panic into the generic 500 response.
///
/// The panic payload itself is logged by the core panic hook.
pub fn handle_panic(_payload: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal("handler panicked".to_string()).into_response()
}
