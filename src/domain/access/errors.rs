//! Access-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | BookingNotFound | 404 |
//! | AccessDenied | 403 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::booking::AccessStatus;
use crate::domain::foundation::{BookingId, DomainError, ErrorCode, PlanKind, ValidationError};

/// Access-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The booking an access record should reference does not exist.
    BookingNotFound { kind: PlanKind, id: BookingId },

    /// The booking exists but its status does not admit entry.
    AccessDenied {
        booking_id: BookingId,
        status: AccessStatus,
    },

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl AccessError {
    pub fn booking_not_found(kind: PlanKind, id: BookingId) -> Self {
        AccessError::BookingNotFound { kind, id }
    }

    pub fn access_denied(booking_id: BookingId, status: AccessStatus) -> Self {
        AccessError::AccessDenied { booking_id, status }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AccessError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AccessError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AccessError::BookingNotFound { .. } => ErrorCode::BookingNotFound,
            AccessError::AccessDenied { .. } => ErrorCode::AccessDenied,
            AccessError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AccessError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            AccessError::BookingNotFound { kind, id } => {
                format!("{} booking not found: {}", kind, id)
            }
            AccessError::AccessDenied { booking_id, status } => format!(
                "Access denied: booking {} is {}, not granted",
                booking_id, status
            ),
            AccessError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AccessError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AccessError {}

impl From<ValidationError> for AccessError {
    fn from(err: ValidationError) -> Self {
        AccessError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for AccessError {
    fn from(err: DomainError) -> Self {
        AccessError::Infrastructure(err.to_string())
    }
}
