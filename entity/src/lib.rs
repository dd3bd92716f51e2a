//! SeaORM entities for the dashboard schema.
//!
//! Table definitions mirror the migrations in the `migration` crate. Relations declare
//! the foreign keys so that schemas generated from entities (as the test utilities do)
//! carry the same cascade rules as the migrated database.

pub mod prelude;

pub mod order;
pub mod order_item;
pub mod product;
