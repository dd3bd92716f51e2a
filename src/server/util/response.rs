//! Success envelope constructors used by controllers.

use axum::{http::StatusCode, Json};

use crate::model::api::{ApiResponse, EmptyResponse};

/// Builds a success response carrying `data`.
pub fn with_data<T>(
    status: StatusCode,
    data: T,
    message: &str,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        status,
        Json(ApiResponse::new(status.as_u16(), message, Some(data))),
    )
}

/// Builds a 200 OK response whose `data` is `null`.
pub fn empty(message: &str) -> (StatusCode, Json<EmptyResponse>) {
    (
        StatusCode::OK,
        Json(EmptyResponse::new(StatusCode::OK.as_u16(), message)),
    )
}
