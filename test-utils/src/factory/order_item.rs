//! Order item factory for creating test order line entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test order items with customizable fields.
///
/// The parent order and referenced product must already exist.
pub struct OrderItemFactory<'a> {
    db: &'a DatabaseConnection,
    order_id: i32,
    product_id: i32,
    quantity: i32,
    price: f64,
}

impl<'a> OrderItemFactory<'a> {
    /// Creates a new OrderItemFactory with default values.
    ///
    /// Defaults:
    /// - quantity: `1`
    /// - price: `10.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `order_id` - ID of the order this item belongs to
    /// - `product_id` - ID of the purchased product
    pub fn new(db: &'a DatabaseConnection, order_id: i32, product_id: i32) -> Self {
        Self {
            db,
            order_id,
            product_id,
            quantity: 1,
            price: 10.0,
        }
    }

    /// Sets the purchased quantity.
    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the unit price snapshot.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the order item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order_item::Model)` - Created order item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order_item::Model, DbErr> {
        entity::order_item::ActiveModel {
            id: ActiveValue::NotSet,
            order_id: ActiveValue::Set(self.order_id),
            product_id: ActiveValue::Set(self.product_id),
            quantity: ActiveValue::Set(self.quantity),
            price: ActiveValue::Set(self.price),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order item with default quantity and price.
///
/// # Returns
/// - `Ok(entity::order_item::Model)` - Created order item entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    product_id: i32,
) -> Result<entity::order_item::Model, DbErr> {
    OrderItemFactory::new(db, order_id, product_id).build().await
}
