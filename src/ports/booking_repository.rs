//! Booking repository port.
//!
//! Besides plain CRUD this port owns the one gated write of the booking
//! module: inserting a group booking only while its subscription has a free
//! slot, and replacing a group booking only if the new version still fits.
//!
//! # Atomicity
//!
//! [`BookingRepository::save_within_capacity`] and
//! [`BookingRepository::update_within_capacity`] must evaluate the capacity
//! rule and write as one serialized unit. Two concurrent calls for the same
//! subscription must never both observe the last free slot.

use crate::domain::booking::Booking;
use crate::domain::foundation::{
    BookingId, DomainError, PlanKind, SubscriptionId, Timestamp, UserId,
};
use async_trait::async_trait;

/// Optional equality filters for listing bookings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilter {
    pub user_id: Option<UserId>,
    pub subscription_id: Option<SubscriptionId>,
}

impl BookingFilter {
    /// True if `booking` satisfies every set filter.
    pub fn matches(&self, booking: &Booking) -> bool {
        self.user_id.map_or(true, |u| booking.user_id == u)
            && self
                .subscription_id
                .map_or(true, |s| booking.subscription_id == s)
    }
}

/// Result of a capacity-gated write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAdmission {
    /// The booking was written.
    Admitted,
    /// No group subscription with the booking's `subscription_id` exists.
    SubscriptionMissing,
    /// Every slot is taken; nothing was written.
    Full { capacity: i32, active: i64 },
}

/// Repository port for booking persistence.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a booking without any admission check.
    async fn save(&self, booking: &Booking) -> Result<(), DomainError>;

    /// Insert a group booking if the subscription's capacity allows it at `now`.
    async fn save_within_capacity(
        &self,
        booking: &Booking,
        now: Timestamp,
    ) -> Result<GroupAdmission, DomainError>;

    /// Replace every column of an existing booking.
    ///
    /// # Errors
    ///
    /// - `BookingNotFound` if no row has this id
    async fn update(&self, booking: &Booking) -> Result<(), DomainError>;

    /// Replace a group booking, re-checking capacity at `now`.
    ///
    /// The count excludes the booking itself. Capacity only matters when the
    /// new version holds a slot at `now`; a version that releases its slot
    /// (e.g. a revocation) is always written, even if the subscription is
    /// gone. A version that holds access against a missing subscription
    /// yields `SubscriptionMissing`.
    ///
    /// # Errors
    ///
    /// - `BookingNotFound` if no group booking has this id
    async fn update_within_capacity(
        &self,
        booking: &Booking,
        now: Timestamp,
    ) -> Result<GroupAdmission, DomainError>;

    /// Find a booking by kind and id. Returns `None` if absent.
    async fn find_by_id(
        &self,
        kind: PlanKind,
        id: &BookingId,
    ) -> Result<Option<Booking>, DomainError>;

    /// Hard-delete a booking.
    ///
    /// # Errors
    ///
    /// - `BookingNotFound` if no row was deleted
    async fn delete(&self, kind: PlanKind, id: &BookingId) -> Result<(), DomainError>;

    /// List bookings of a kind in creation order.
    async fn list(&self, kind: PlanKind, filter: &BookingFilter)
        -> Result<Vec<Booking>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::{AccessStatus, BookingDraft};

    #[test]
    fn booking_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn BookingRepository) {}
    }

    #[test]
    fn filter_matches_on_every_set_field() {
        let user = UserId::new();
        let sub = SubscriptionId::new();
        let booking = Booking::create(
            PlanKind::Coach,
            BookingDraft {
                subscription_id: sub,
                user_id: user,
                payment: 0,
                access_status: AccessStatus::Pending,
                start_date: Timestamp::now(),
                count: 1,
            },
            Timestamp::now(),
        )
        .unwrap();

        assert!(BookingFilter::default().matches(&booking));
        assert!(BookingFilter {
            user_id: Some(user),
            subscription_id: Some(sub)
        }
        .matches(&booking));
        assert!(!BookingFilter {
            user_id: Some(UserId::new()),
            subscription_id: Some(sub)
        }
        .matches(&booking));
    }
}
