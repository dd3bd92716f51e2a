use axum::http::{Method, Uri};

use crate::server::error::AppError;

/// Answers requests that match no route with a 404 error envelope.
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    tracing::error!(%method, %uri, "No route matched request");

    AppError::not_found("Route not found", format!("No route for {} {}", method, uri.path()))
}

/// Answers requests on a known path with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    tracing::error!(%method, %uri, "Method not allowed");

    AppError::method_not_allowed(
        "Method not allowed",
        format!("{} is not supported on {}", method, uri.path()),
    )
}
