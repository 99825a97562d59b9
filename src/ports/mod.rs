//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `SubscriptionRepository` - Offering persistence (plain CRUD)
//! - `BookingRepository` - Booking persistence plus the capacity-gated group insert
//! - `AccessRepository` - Status-gated access records and the check-in flow

mod access_repository;
mod booking_repository;
mod subscription_repository;

pub use access_repository::{AccessGrant, AccessRepository};
pub use booking_repository::{BookingFilter, BookingRepository, GroupAdmission};
pub use subscription_repository::{SubscriptionFilter, SubscriptionRepository};
