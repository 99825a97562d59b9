//! Domain layer - Core business logic and types.
//!
//! Pure domain logic with no external dependencies beyond basic crates.
//! Contains value objects, aggregates, the capacity admission rule and
//! the access eligibility predicates.

pub mod access;
pub mod booking;
pub mod foundation;
pub mod subscription;
