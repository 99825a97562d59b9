//! Access records and check-in outcomes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BookingId, PlanKind, Timestamp};

/// One instant of physical access exercised against a booking.
///
/// Records are append-only: they are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRecord {
    pub kind: PlanKind,
    pub booking_id: BookingId,
    pub date: Timestamp,
}

impl AccessRecord {
    pub fn new(kind: PlanKind, booking_id: BookingId, date: Timestamp) -> Self {
        Self {
            kind,
            booking_id,
            date,
        }
    }
}

/// Answer to "may this member enter this facility right now?".
///
/// Denial is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckInOutcome {
    /// Entry allowed; an access record was written.
    Granted,
    /// No granted, started booking at this facility.
    Denied,
}

impl CheckInOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, CheckInOutcome::Granted)
    }

    /// Message returned to the gate terminal.
    pub fn message(&self) -> &'static str {
        match self {
            CheckInOutcome::Granted => "granted",
            CheckInOutcome::Denied => "denied",
        }
    }
}
