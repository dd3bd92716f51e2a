use sea_orm::DbErr;
use thiserror::Error;

/// Failures reported by the order service.
///
/// Display text is surfaced to clients verbatim, so variants describe the failure
/// without exposing store internals. The underlying database error stays reachable
/// through `source()` and `Debug` for server-side logging.
#[derive(Error, Debug)]
pub enum OrderError {
    /// No order exists with the given ID.
    #[error("Order with ID {0} not found")]
    NotFound(i32),

    /// The order store could not complete the operation.
    #[error("Failed to access order store")]
    Store(#[from] DbErr),
}
