//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories. Each service is exposed as
//! an object-safe trait so the application state can hold it as `Arc<dyn _>` and tests
//! can substitute fakes; the `Db*` implementations back the traits with SeaORM
//! repositories.

pub mod order;
pub mod product;
