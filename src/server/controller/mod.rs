//! HTTP request handlers.
//!
//! Controllers parse path and body input, call a service from the application state,
//! and map the outcome to a response envelope. They contain no business logic.

pub mod fallback;
pub mod order;
pub mod product;

#[cfg(test)]
mod test;
