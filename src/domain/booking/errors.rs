//! Booking-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | SubscriptionNotFound | 404 |
//! | CapacityExceeded | 409 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{
    BookingId, DomainError, ErrorCode, PlanKind, SubscriptionId, ValidationError,
};

/// Booking-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Booking was not found.
    NotFound { kind: PlanKind, id: BookingId },

    /// The referenced subscription does not exist.
    SubscriptionNotFound(SubscriptionId),

    /// The group subscription has no free slot.
    CapacityExceeded {
        subscription_id: SubscriptionId,
        capacity: i32,
        active: i64,
    },

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl BookingError {
    pub fn not_found(kind: PlanKind, id: BookingId) -> Self {
        BookingError::NotFound { kind, id }
    }

    pub fn subscription_not_found(id: SubscriptionId) -> Self {
        BookingError::SubscriptionNotFound(id)
    }

    pub fn capacity_exceeded(subscription_id: SubscriptionId, capacity: i32, active: i64) -> Self {
        BookingError::CapacityExceeded {
            subscription_id,
            capacity,
            active,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        BookingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        BookingError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::NotFound { .. } => ErrorCode::BookingNotFound,
            BookingError::SubscriptionNotFound(_) => ErrorCode::SubscriptionNotFound,
            BookingError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            BookingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            BookingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            BookingError::NotFound { kind, id } => {
                format!("{} booking not found: {}", kind, id)
            }
            BookingError::SubscriptionNotFound(id) => {
                format!("Subscription not found: {}", id)
            }
            BookingError::CapacityExceeded {
                subscription_id,
                capacity,
                active,
            } => format!(
                "Group {} is full: {} of {} slots in use",
                subscription_id, active, capacity
            ),
            BookingError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            BookingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BookingError {}

impl From<ValidationError> for BookingError {
    fn from(err: ValidationError) -> Self {
        BookingError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        BookingError::Infrastructure(err.to_string())
    }
}
