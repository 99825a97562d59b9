//! Booking aggregate.
//!
//! A booking is a member's claim against a subscription. Personal, group and
//! coach bookings share one shape and differ only in where they are stored
//! and, for group bookings, in how they are admitted.

use super::status::AccessStatus;
use crate::domain::foundation::{
    BookingId, PlanKind, SubscriptionId, Timestamp, UserId, ValidationError,
};

/// Caller-supplied fields for creating or replacing a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub subscription_id: SubscriptionId,
    pub user_id: UserId,
    /// Amount paid in minor currency units.
    pub payment: i64,
    pub access_status: AccessStatus,
    pub start_date: Timestamp,
    /// Remaining uses.
    pub count: i32,
}

impl BookingDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.payment < 0 {
            return Err(ValidationError::below_minimum("payment", 0, self.payment));
        }
        if self.count < 0 {
            return Err(ValidationError::below_minimum(
                "count",
                0,
                i64::from(self.count),
            ));
        }
        Ok(())
    }
}

/// A persisted booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub kind: PlanKind,
    pub subscription_id: SubscriptionId,
    pub user_id: UserId,
    pub payment: i64,
    pub access_status: AccessStatus,
    pub start_date: Timestamp,
    pub count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Booking {
    /// Creates a new booking with a fresh id.
    pub fn create(
        kind: PlanKind,
        draft: BookingDraft,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        draft.validate()?;
        Ok(Self {
            id: BookingId::new(),
            kind,
            subscription_id: draft.subscription_id,
            user_id: draft.user_id,
            payment: draft.payment,
            access_status: draft.access_status,
            start_date: draft.start_date,
            count: draft.count,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces every mutable field, keeping id, kind and creation time.
    pub fn apply(&mut self, draft: BookingDraft, now: Timestamp) -> Result<(), ValidationError> {
        draft.validate()?;
        self.subscription_id = draft.subscription_id;
        self.user_id = draft.user_id;
        self.payment = draft.payment;
        self.access_status = draft.access_status;
        self.start_date = draft.start_date;
        self.count = draft.count;
        self.updated_at = now;
        Ok(())
    }

    /// True if `now` falls in `[start_date, start_date + duration_hours)`.
    pub fn is_active_at(&self, now: Timestamp, duration_hours: i32) -> bool {
        let end = self.start_date.add_hours(i64::from(duration_hours));
        !self.start_date.is_after(&now) && now.is_before(&end)
    }

    /// True if the holder may enter at `now`: access granted and the booking
    /// has started.
    pub fn admits_entry_at(&self, now: Timestamp) -> bool {
        self.access_status.permits_entry() && !self.start_date.is_after(&now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(status: AccessStatus, start_date: Timestamp) -> BookingDraft {
        BookingDraft {
            subscription_id: SubscriptionId::new(),
            user_id: UserId::new(),
            payment: 1500,
            access_status: status,
            start_date,
            count: 10,
        }
    }

    #[test]
    fn create_stamps_both_timestamps() {
        let now = Timestamp::now();
        let booking = Booking::create(PlanKind::Personal, draft(AccessStatus::Pending, now), now)
            .unwrap();

        assert_eq!(booking.kind, PlanKind::Personal);
        assert_eq!(booking.created_at, now);
        assert_eq!(booking.updated_at, now);
    }

    #[test]
    fn create_rejects_negative_payment() {
        let now = Timestamp::now();
        let mut d = draft(AccessStatus::Pending, now);
        d.payment = -5;
        let err = Booking::create(PlanKind::Coach, d, now).unwrap_err();
        assert_eq!(err.field(), "payment");
    }

    #[test]
    fn create_rejects_negative_count() {
        let now = Timestamp::now();
        let mut d = draft(AccessStatus::Pending, now);
        d.count = -1;
        let err = Booking::create(PlanKind::Coach, d, now).unwrap_err();
        assert_eq!(err.field(), "count");
    }

    #[test]
    fn apply_refreshes_updated_at_only() {
        let created = Timestamp::now();
        let mut booking =
            Booking::create(PlanKind::Group, draft(AccessStatus::Pending, created), created)
                .unwrap();
        let id = booking.id;
        let later = created.add_minutes(3);

        booking
            .apply(draft(AccessStatus::Granted, created), later)
            .unwrap();

        assert_eq!(booking.id, id);
        assert_eq!(booking.kind, PlanKind::Group);
        assert_eq!(booking.access_status, AccessStatus::Granted);
        assert_eq!(booking.created_at, created);
        assert_eq!(booking.updated_at, later);
    }

    #[test]
    fn is_active_at_respects_window_bounds() {
        let start = Timestamp::now();
        let booking =
            Booking::create(PlanKind::Group, draft(AccessStatus::Granted, start), start).unwrap();

        assert!(!booking.is_active_at(start.add_minutes(-1), 1));
        assert!(booking.is_active_at(start, 1));
        assert!(booking.is_active_at(start.add_minutes(59), 1));
        assert!(!booking.is_active_at(start.add_hours(1), 1));
    }

    #[test]
    fn admits_entry_requires_granted_and_started() {
        let now = Timestamp::now();
        let started = Booking::create(
            PlanKind::Personal,
            draft(AccessStatus::Granted, now.add_hours(-2)),
            now,
        )
        .unwrap();
        let future = Booking::create(
            PlanKind::Personal,
            draft(AccessStatus::Granted, now.add_hours(2)),
            now,
        )
        .unwrap();
        let pending = Booking::create(
            PlanKind::Personal,
            draft(AccessStatus::Pending, now.add_hours(-2)),
            now,
        )
        .unwrap();

        assert!(started.admits_entry_at(now));
        assert!(!future.admits_entry_at(now));
        assert!(!pending.admits_entry_at(now));
    }
}
