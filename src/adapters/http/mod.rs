//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter (`dto`, `handlers`, `routes`).
//! All modules share one [`AppState`] and one error type.

pub mod access;
pub mod booking;
pub mod error;
pub mod router;
pub mod state;
pub mod subscription;

pub use error::{ApiError, ErrorResponse};
pub use router::app_router;
pub use state::AppState;
