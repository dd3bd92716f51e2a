use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope wrapping every successful response.
///
/// `status` mirrors the HTTP status code of the response. `data` is `null` for
/// operations that return no payload (updates and deletes).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    #[schema(example = 200)]
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status,
            message: message.into(),
            data,
        }
    }
}

/// Success envelope of operations without a payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyResponse {
    #[schema(example = 200)]
    pub status: u16,
    pub message: String,
    /// Always `null`.
    #[schema(value_type = Option<Object>)]
    pub data: Option<()>,
}

impl EmptyResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }
}

/// Envelope wrapping every error response.
///
/// `message` summarises which operation failed, `error` carries the underlying reason.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    #[schema(example = 400)]
    pub status: u16,
    #[schema(example = "Invalid order ID")]
    pub message: String,
    #[schema(example = "ID cannot be empty")]
    pub error: String,
}
