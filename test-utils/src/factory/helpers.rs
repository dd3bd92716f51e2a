//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an order with `item_count` line items, each referencing its own product.
///
/// Items are created in order, so their IDs ascend in the same sequence as the
/// returned vector.
///
/// # Arguments
/// - `db` - Database connection
/// - `item_count` - Number of order items to create
///
/// # Returns
/// - `Ok((order, items))` - The created order and its items
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_items(
    db: &DatabaseConnection,
    item_count: usize,
) -> Result<(entity::order::Model, Vec<entity::order_item::Model>), DbErr> {
    let order = crate::factory::order::create_order(db).await?;

    let mut items = Vec::with_capacity(item_count);
    for _ in 0..item_count {
        let product = crate::factory::product::create_product(db).await?;
        let item = crate::factory::order_item::create_order_item(db, order.id, product.id).await?;
        items.push(item);
    }

    Ok((order, items))
}
