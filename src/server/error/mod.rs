//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into error envelopes. The `AppError` enum is the top-level error
//! type returned by every handler and implements `IntoResponse`.
//!
//! Domain errors (`OrderError`, `ProductError`) are never converted implicitly. Each
//! controller decides which HTTP outcome a domain failure maps to and wraps it in one of
//! the envelope variants, so the same service error can surface as 404 from a lookup and
//! as 500 from a mutation.

pub mod config;
pub mod order;
pub mod product;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM outside of a service call, such as
    /// connecting or running migrations.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Binding the listener or serving connections failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request failed validation before reaching a service.
    ///
    /// Results in 400 Bad Request.
    #[error("{message}: {error}")]
    BadRequest { message: String, error: String },

    /// Requested resource does not exist.
    ///
    /// Results in 404 Not Found.
    #[error("{message}: {error}")]
    NotFound { message: String, error: String },

    /// No handler accepts the request method on a known path.
    ///
    /// Results in 405 Method Not Allowed.
    #[error("{message}: {error}")]
    MethodNotAllowed { message: String, error: String },

    /// A service call failed.
    ///
    /// Results in 500 Internal Server Error. The service's error text is returned to
    /// the client verbatim, so service errors must never include internal details.
    #[error("{message}: {error}")]
    OperationFailed { message: String, error: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, error: impl ToString) -> Self {
        Self::BadRequest {
            message: message.into(),
            error: error.to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>, error: impl ToString) -> Self {
        Self::NotFound {
            message: message.into(),
            error: error.to_string(),
        }
    }

    pub fn method_not_allowed(message: impl Into<String>, error: impl ToString) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
            error: error.to_string(),
        }
    }

    pub fn operation_failed(message: impl Into<String>, error: impl ToString) -> Self {
        Self::OperationFailed {
            message: message.into(),
            error: error.to_string(),
        }
    }
}

/// Converts application errors into error envelopes.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 405 Method Not Allowed - For `MethodNotAllowed`
/// - 500 Internal Server Error - For `OperationFailed` with the service message, and for
///   every infrastructure error with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest { message, error } => {
                error_envelope(StatusCode::BAD_REQUEST, message, error)
            }
            Self::NotFound { message, error } => {
                error_envelope(StatusCode::NOT_FOUND, message, error)
            }
            Self::MethodNotAllowed { message, error } => {
                error_envelope(StatusCode::METHOD_NOT_ALLOWED, message, error)
            }
            Self::OperationFailed { message, error } => {
                error_envelope(StatusCode::INTERNAL_SERVER_ERROR, message, error)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_envelope(status: StatusCode, message: String, error: String) -> Response {
    (
        status,
        Json(ErrorDto {
            status: status.as_u16(),
            message,
            error,
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_envelope(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
            "Internal server error".to_string(),
        )
    }
}
