//! HTTP DTOs for booking endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::booking::{AccessStatus, Booking, BookingDraft};
use crate::domain::foundation::{PlanKind, SubscriptionId, Timestamp, UserId, ValidationError};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of create and update requests.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub subscription_id: String,
    pub user_id: String,
    /// Amount paid in minor currency units.
    pub payment: i64,
    /// One of `pending`, `granted`, `revoked`, `denied`. Defaults to `pending`.
    #[serde(default)]
    pub access_status: Option<String>,
    /// RFC 3339 instant the booking starts.
    pub start_date: String,
    #[serde(default)]
    pub count: i32,
}

impl BookingRequest {
    pub fn into_draft(self) -> Result<BookingDraft, ValidationError> {
        let access_status = match self.access_status.as_deref() {
            Some(raw) => raw.parse()?,
            None => AccessStatus::default(),
        };

        Ok(BookingDraft {
            subscription_id: SubscriptionId::parse("subscription_id", &self.subscription_id)?,
            user_id: UserId::parse("user_id", &self.user_id)?,
            payment: self.payment,
            access_status,
            start_date: Timestamp::parse_rfc3339("start_date", &self.start_date)?,
            count: self.count,
        })
    }
}

/// Query string of the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBookingsParams {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub subscription_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A booking as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingResponse {
    pub id: String,
    pub kind: PlanKind,
    pub subscription_id: String,
    pub user_id: String,
    pub payment: i64,
    pub access_status: AccessStatus,
    pub start_date: String,
    pub count: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id.to_string(),
            kind: b.kind,
            subscription_id: b.subscription_id.to_string(),
            user_id: b.user_id.to_string(),
            payment: b.payment,
            access_status: b.access_status,
            start_date: b.start_date.to_rfc3339(),
            count: b.count,
            created_at: b.created_at.to_rfc3339(),
            updated_at: b.updated_at.to_rfc3339(),
        }
    }
}

/// Body of the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: Option<&str>) -> BookingRequest {
        BookingRequest {
            subscription_id: SubscriptionId::new().to_string(),
            user_id: UserId::new().to_string(),
            payment: 1200,
            access_status: status.map(str::to_string),
            start_date: "2026-05-04T09:30:00Z".to_string(),
            count: 1,
        }
    }

    #[test]
    fn status_defaults_to_pending() {
        let draft = request(None).into_draft().unwrap();
        assert_eq!(draft.access_status, AccessStatus::Pending);
    }

    #[test]
    fn status_is_parsed_case_insensitively() {
        let draft = request(Some("GRANTED")).into_draft().unwrap();
        assert_eq!(draft.access_status, AccessStatus::Granted);
    }

    #[test]
    fn unknown_status_is_a_validation_error() {
        let err = request(Some("maybe")).into_draft().unwrap_err();
        assert_eq!(err.field(), "access_status");
    }

    #[test]
    fn bad_start_date_is_a_validation_error() {
        let mut req = request(None);
        req.start_date = "next tuesday".to_string();
        let err = req.into_draft().unwrap_err();
        assert_eq!(err.field(), "start_date");
    }
}
