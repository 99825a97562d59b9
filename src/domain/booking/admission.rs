//! Capacity admission control for group bookings.
//!
//! A group subscription declares how many granted bookings may be active at
//! once. A booking is active from its `start_date` (inclusive) until
//! `start_date + duration` (exclusive). Pending, revoked and denied bookings
//! never occupy a slot.
//!
//! The rule is pure so that every storage adapter evaluates it identically;
//! adapters are responsible for running count-then-insert atomically.

use super::aggregate::Booking;
use crate::domain::foundation::Timestamp;

/// Capacity and window length taken from a group subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityWindow {
    capacity: i32,
    duration_hours: i32,
}

/// Outcome of evaluating a new booking against a capacity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionDecision {
    Admit,
    Full { capacity: i32, active: i64 },
}

impl CapacityWindow {
    pub fn new(capacity: i32, duration_hours: i32) -> Self {
        Self {
            capacity,
            duration_hours,
        }
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn duration_hours(&self) -> i32 {
        self.duration_hours
    }

    /// True if `booking` holds one of the slots at `now`.
    pub fn occupies_slot(&self, booking: &Booking, now: Timestamp) -> bool {
        booking.access_status.permits_entry() && booking.is_active_at(now, self.duration_hours)
    }

    /// Counts the slots held at `now` among the given bookings.
    pub fn count_active<'a>(
        &self,
        bookings: impl IntoIterator<Item = &'a Booking>,
        now: Timestamp,
    ) -> i64 {
        bookings
            .into_iter()
            .filter(|b| self.occupies_slot(b, now))
            .count() as i64
    }

    /// Decides whether one more booking fits next to `active` existing ones.
    pub fn admit(&self, active: i64) -> AdmissionDecision {
        if active >= i64::from(self.capacity) {
            AdmissionDecision::Full {
                capacity: self.capacity,
                active,
            }
        } else {
            AdmissionDecision::Admit
        }
    }
}
