//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let product = factory::create_product(&db).await?;
//! let order = factory::create_order(&db).await?;
//! let item = factory::create_order_item(&db, order.id, product.id).await?;
//!
//! // Order with two items and their products
//! let (order, items) = factory::helpers::create_order_with_items(&db, 2).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let order = factory::order::OrderFactory::new(&db)
//!     .customer_name("Alice")
//!     .status("shipped")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod order;
pub mod order_item;
pub mod product;

pub use order::create_order;
pub use order_item::create_order_item;
pub use product::create_product;
