//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the timestamp value object, the offering kind and
//! the error types that form the vocabulary of the booking domain.

mod errors;
mod ids;
mod plan_kind;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BookingId, CoachId, FacilityId, SubscriptionId, UserId};
pub use plan_kind::PlanKind;
pub use timestamp::Timestamp;
