use sea_orm::DbErr;
use thiserror::Error;

/// Failures reported by the product service.
#[derive(Error, Debug)]
pub enum ProductError {
    /// No product exists with the given ID.
    #[error("Product with ID {0} not found")]
    NotFound(i32),

    /// The product is referenced by order items and cannot be removed.
    #[error("Product with ID {0} is referenced by existing orders")]
    InUse(i32),

    /// The product store could not complete the operation.
    #[error("Failed to access product store")]
    Store(#[from] DbErr),
}
