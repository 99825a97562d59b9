//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations, one
//! submodule per domain module.

pub mod access;
pub mod booking;
pub mod subscription;
