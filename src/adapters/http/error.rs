//! Error responses shared by every HTTP module.
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound (subscription, booking) | 404 |
//! | CapacityExceeded | 409 |
//! | AccessDenied | 403 |
//! | ValidationFailed, malformed JSON body | 400 |
//! | Infrastructure | 500 |

use axum::extract::rejection::JsonRejection;
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::access::AccessError;
use crate::domain::booking::BookingError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::subscription::SubscriptionError;

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// API error type that converts module errors to HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    fn new(code: ErrorCode, message: String) -> Self {
        Self { code, message }
    }

    pub fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::SubscriptionNotFound | ErrorCode::BookingNotFound => StatusCode::NOT_FOUND,
            ErrorCode::CapacityExceeded => StatusCode::CONFLICT,
            ErrorCode::AccessDenied => StatusCode::FORBIDDEN,
            ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<SubscriptionError> for ApiError {
    fn from(err: SubscriptionError) -> Self {
        Self::new(err.code(), err.message())
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        Self::new(err.code(), err.message())
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        Self::new(err.code(), err.message())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

/// Undecodable bodies (bad syntax, wrong field types, missing content type)
/// share the `VALIDATION_FAILED` shape instead of axum's plain-text 422.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(ErrorCode::ValidationFailed, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = %self.code, "Internal error: {}", self.message);
        }
        let body = ErrorResponse::new(self.code.to_string(), self.message);
        (status, Json(body)).into_response()
    }
}
