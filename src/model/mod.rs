//! Wire types shared by the HTTP API.
//!
//! DTOs in this module are what clients send and receive. They carry no behaviour beyond
//! serialization and are converted to and from the server's domain models at the
//! controller boundary.

pub mod api;
pub mod order;
pub mod product;
