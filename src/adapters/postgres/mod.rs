//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresSubscriptionRepository` - Offerings, one table per kind
//! - `PostgresBookingRepository` - Bookings and the capacity-gated group insert
//! - `PostgresAccessRepository` - Status-gated access records and check-in
//!
//! Gated writes run in SERIALIZABLE transactions.

mod access_repository;
mod booking_repository;
mod pool;
mod subscription_repository;
mod transaction;

pub use access_repository::PostgresAccessRepository;
pub use booking_repository::PostgresBookingRepository;
pub use pool::{connect, run_migrations};
pub use subscription_repository::PostgresSubscriptionRepository;
