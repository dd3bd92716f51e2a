//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) for each domain. They use SeaORM
//! entity models internally and return them unchanged; conversion into domain models
//! happens in the service layer.

pub mod order;
pub mod product;

#[cfg(test)]
mod test;
