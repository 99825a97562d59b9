//! Gym booking service
//!
//! Subscriptions (personal, group and coach offerings), bookings against
//! them with capacity-gated group admission, and access control: recording
//! entries against granted bookings and the facility check-in gate.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
