//! Order domain models.

use chrono::{DateTime, Utc};

use crate::model::order::{OrderDto, OrderItemDto};

/// A customer order with its current lifecycle status.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub customer_name: String,
    /// Free-form lifecycle label such as `pending` or `shipped`.
    pub status: String,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            customer_name: entity.customer_name,
            status: entity.status,
            total_amount: entity.total_amount,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            customer_name: self.customer_name,
            status: self.status,
            total_amount: self.total_amount,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// One purchased line of an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    /// Unit price at the time the order was placed.
    pub price: f64,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            product_id: entity.product_id,
            quantity: entity.quantity,
            price: entity.price,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
            price: self.price,
        }
    }
}
