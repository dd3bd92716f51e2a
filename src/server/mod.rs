//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, input validation, and DTO conversion
//! - **Service Layer** (`service/`) - Business operations behind injectable traits
//! - **Data Layer** (`data/`) - SeaORM repositories
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! Supporting modules provide configuration (`config`), shared state (`state`),
//! initialization (`startup`), and route/OpenAPI wiring (`router`).
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Controller** parses the path ID and body, rejecting invalid input with 400
//! 3. **Service** executes the operation through a repository
//! 4. **Controller** maps the outcome to a success or error envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
