//! Application state shared across all request handlers.
//!
//! The state holds the services behind trait objects. It is built once during startup
//! and cloned into each handler through Axum's state extraction; clones share the same
//! services.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::{
    order::{DbOrderService, OrderService},
    product::{DbProductService, ProductService},
};

#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<dyn OrderService>,
    pub product_service: Arc<dyn ProductService>,
}

impl AppState {
    pub fn new(
        order_service: Arc<dyn OrderService>,
        product_service: Arc<dyn ProductService>,
    ) -> Self {
        Self {
            order_service,
            product_service,
        }
    }

    /// Creates the state with database-backed services sharing one connection pool.
    pub fn from_database(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(DbOrderService::new(db.clone())),
            Arc::new(DbProductService::new(db)),
        )
    }
}
