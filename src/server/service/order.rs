use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::order::OrderRepository,
    error::order::OrderError,
    model::order::{Order, OrderItem},
};

/// Order management operations consumed by the order controller.
///
/// Errors carry a client-safe message; callers must not rely on anything beyond the
/// `NotFound`/`Store` distinction.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Replaces the status of an order. Any label is accepted.
    async fn update_order_status(&self, id: i32, status: String) -> Result<(), OrderError>;

    async fn get_all_orders(&self) -> Result<Vec<Order>, OrderError>;

    async fn get_order_by_id(&self, id: i32) -> Result<Order, OrderError>;

    /// Deletes an order together with its items.
    async fn delete_order(&self, id: i32) -> Result<(), OrderError>;

    /// Gets an order and its items ordered by item ID.
    async fn get_order_detail(&self, id: i32) -> Result<(Order, Vec<OrderItem>), OrderError>;
}

pub struct DbOrderService {
    db: DatabaseConnection,
}

impl DbOrderService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderService for DbOrderService {
    async fn update_order_status(&self, id: i32, status: String) -> Result<(), OrderError> {
        let repo = OrderRepository::new(&self.db);

        repo.update_status(id, status)
            .await?
            .ok_or(OrderError::NotFound(id))?;

        Ok(())
    }

    async fn get_all_orders(&self) -> Result<Vec<Order>, OrderError> {
        let repo = OrderRepository::new(&self.db);

        let orders = repo.get_all().await?;

        Ok(orders.into_iter().map(Order::from_entity).collect())
    }

    async fn get_order_by_id(&self, id: i32) -> Result<Order, OrderError> {
        let repo = OrderRepository::new(&self.db);

        repo.get_by_id(id)
            .await?
            .map(Order::from_entity)
            .ok_or(OrderError::NotFound(id))
    }

    async fn delete_order(&self, id: i32) -> Result<(), OrderError> {
        let repo = OrderRepository::new(&self.db);

        if !repo.delete(id).await? {
            return Err(OrderError::NotFound(id));
        }

        Ok(())
    }

    async fn get_order_detail(&self, id: i32) -> Result<(Order, Vec<OrderItem>), OrderError> {
        let repo = OrderRepository::new(&self.db);

        let (order, items) = repo
            .get_with_items(id)
            .await?
            .ok_or(OrderError::NotFound(id))?;

        Ok((
            Order::from_entity(order),
            items.into_iter().map(OrderItem::from_entity).collect(),
        ))
    }
}
