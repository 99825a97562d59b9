//! Access repository port.
//!
//! Both writes on this port are gated: an access record is only inserted
//! when the referenced booking admits entry. Implementations must read the
//! booking and insert the record in one transaction so a concurrent status
//! change cannot slip in between.

use crate::domain::access::{AccessRecord, CheckInOutcome};
use crate::domain::booking::AccessStatus;
use crate::domain::foundation::{BookingId, DomainError, FacilityId, PlanKind, Timestamp, UserId};
use async_trait::async_trait;

/// Result of a status-gated access insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessGrant {
    /// The record was inserted, echoed back as stored.
    Recorded(AccessRecord),
    /// No booking of this kind has the record's `booking_id`.
    BookingMissing,
    /// The booking exists but is not granted; nothing was inserted.
    NotGranted(AccessStatus),
}

/// Repository port for access records.
#[async_trait]
pub trait AccessRepository: Send + Sync {
    /// Insert `record` if its booking is currently granted.
    async fn record_if_granted(&self, record: &AccessRecord) -> Result<AccessGrant, DomainError>;

    /// All records for a booking in insertion order.
    async fn list_for_booking(
        &self,
        kind: PlanKind,
        booking_id: &BookingId,
    ) -> Result<Vec<AccessRecord>, DomainError>;

    /// Resolve the member's personal booking at `facility_id` and, if it
    /// admits entry at `now`, stamp an access record dated `now`.
    ///
    /// When several bookings qualify the most recently started one is used.
    async fn check_in(
        &self,
        user_id: &UserId,
        facility_id: &FacilityId,
        now: Timestamp,
    ) -> Result<CheckInOutcome, DomainError>;
}
