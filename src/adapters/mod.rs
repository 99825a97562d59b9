//! Adapters - Implementations of ports for external systems.
//!
//! - `http` - axum REST API over the application handlers
//! - `postgres` - sqlx-backed repositories
//! - `memory` - in-process repositories for tests and local runs

pub mod http;
pub mod memory;
pub mod postgres;
