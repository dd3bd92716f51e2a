//! Domain models used between the data, service, and controller layers.
//!
//! Repositories return SeaORM entity models; services convert them into these types with
//! `from_entity`, and controllers convert them into DTOs with `into_dto`.

pub mod order;
pub mod product;
