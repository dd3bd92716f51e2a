//! Order factory for creating test order entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db)
///     .status("shipped")
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    customer_name: String,
    status: String,
    total_amount: f64,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - customer_name: `"Customer {id}"` where id is auto-incremented
    /// - status: `"pending"`
    /// - total_amount: `20.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            customer_name: format!("Customer {}", id),
            status: "pending".to_string(),
            total_amount: 20.0,
        }
    }

    /// Sets the customer name.
    pub fn customer_name(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = customer_name.into();
        self
    }

    /// Sets the order status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the order total.
    pub fn total_amount(mut self, total_amount: f64) -> Self {
        self.total_amount = total_amount;
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            customer_name: ActiveValue::Set(self.customer_name),
            status: ActiveValue::Set(self.status),
            total_amount: ActiveValue::Set(self.total_amount),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values.
///
/// # Returns
/// - `Ok(entity::order::Model)` - Created order entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_order(db: &DatabaseConnection) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db).build().await
}
