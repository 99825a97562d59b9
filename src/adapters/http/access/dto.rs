//! HTTP DTOs for access endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::access::{AccessRecord, CheckInOutcome};
use crate::domain::foundation::PlanKind;

/// Body of `POST /api/access/:kind`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordAccessRequest {
    pub booking_id: String,
    /// RFC 3339 instant of entry. Defaults to the time of the request.
    #[serde(default)]
    pub date: Option<String>,
}

/// Body of `POST /api/access/check-in`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    pub user_id: String,
    pub facility_id: String,
}

/// An access record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessRecordResponse {
    pub kind: PlanKind,
    pub booking_id: String,
    pub date: String,
}

impl From<AccessRecord> for AccessRecordResponse {
    fn from(r: AccessRecord) -> Self {
        Self {
            kind: r.kind,
            booking_id: r.booking_id.to_string(),
            date: r.date.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessListResponse {
    pub records: Vec<AccessRecordResponse>,
}

/// Gate answer: `"granted"` or `"denied"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckInResponse {
    pub message: String,
}

impl From<CheckInOutcome> for CheckInResponse {
    fn from(outcome: CheckInOutcome) -> Self {
        Self {
            message: outcome.message().to_string(),
        }
    }
}
