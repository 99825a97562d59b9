//! In-memory implementation of all repository ports.
//!
//! One mutex guards subscriptions, bookings and access records together, so
//! every gated operation (capacity check + write, status check + insert,
//! check-in) runs as a single critical section, the same guarantee the
//! Postgres adapter gets from a serializable transaction.
//!
//! Intended for tests and local experiments. State is lost on drop.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::access::{AccessRecord, CheckInOutcome};
use crate::domain::booking::{AdmissionDecision, Booking};
use crate::domain::foundation::{
    BookingId, DomainError, ErrorCode, FacilityId, PlanKind, SubscriptionId, Timestamp, UserId,
};
use crate::domain::subscription::Subscription;
use crate::ports::{
    AccessGrant, AccessRepository, BookingFilter, BookingRepository, GroupAdmission,
    SubscriptionFilter, SubscriptionRepository,
};

#[derive(Default)]
struct State {
    subscriptions: Vec<Subscription>,
    bookings: Vec<Booking>,
    access: Vec<AccessRecord>,
}

impl State {
    fn subscription(&self, kind: PlanKind, id: &SubscriptionId) -> Option<&Subscription> {
        self.subscriptions
            .iter()
            .find(|s| s.kind() == kind && &s.id == id)
    }

    fn booking(&self, kind: PlanKind, id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.kind == kind && &b.id == id)
    }

    fn replace_booking(&mut self, booking: &Booking) -> Result<(), DomainError> {
        let slot = self
            .bookings
            .iter_mut()
            .find(|b| b.kind == booking.kind && b.id == booking.id)
            .ok_or_else(|| DomainError::new(ErrorCode::BookingNotFound, "Booking not found"))?;
        *slot = booking.clone();
        Ok(())
    }
}

/// Process-local store implementing every repository port.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Number of access records of any kind.
    pub async fn access_record_count(&self) -> usize {
        self.state.lock().await.access.len()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemoryStore {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        self.state
            .lock()
            .await
            .subscriptions
            .push(subscription.clone());
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        let slot = state
            .subscriptions
            .iter_mut()
            .find(|s| s.kind() == subscription.kind() && s.id == subscription.id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::SubscriptionNotFound, "Subscription not found")
            })?;
        *slot = subscription.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        kind: PlanKind,
        id: &SubscriptionId,
    ) -> Result<Option<Subscription>, DomainError> {
        Ok(self.state.lock().await.subscription(kind, id).cloned())
    }

    async fn delete(&self, kind: PlanKind, id: &SubscriptionId) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        let before = state.subscriptions.len();
        state
            .subscriptions
            .retain(|s| !(s.kind() == kind && &s.id == id));
        if state.subscriptions.len() == before {
            return Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                "Subscription not found",
            ));
        }
        Ok(())
    }

    async fn list(
        &self,
        kind: PlanKind,
        filter: &SubscriptionFilter,
    ) -> Result<Vec<Subscription>, DomainError> {
        Ok(self
            .state
            .lock()
            .await
            .subscriptions
            .iter()
            .filter(|s| s.kind() == kind)
            .filter(|s| filter.facility_id.map_or(true, |f| s.facility_id == f))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn save(&self, booking: &Booking) -> Result<(), DomainError> {
        self.state.lock().await.bookings.push(booking.clone());
        Ok(())
    }

    async fn save_within_capacity(
        &self,
        booking: &Booking,
        now: Timestamp,
    ) -> Result<GroupAdmission, DomainError> {
        let mut state = self.state.lock().await;

        let Some(window) = state
            .subscription(PlanKind::Group, &booking.subscription_id)
            .and_then(Subscription::capacity_window)
        else {
            return Ok(GroupAdmission::SubscriptionMissing);
        };

        let active = window.count_active(
            state.bookings.iter().filter(|b| {
                b.kind == PlanKind::Group && b.subscription_id == booking.subscription_id
            }),
            now,
        );

        match window.admit(active) {
            AdmissionDecision::Full { capacity, active } => {
                Ok(GroupAdmission::Full { capacity, active })
            }
            AdmissionDecision::Admit => {
                state.bookings.push(booking.clone());
                Ok(GroupAdmission::Admitted)
            }
        }
    }

    async fn update(&self, booking: &Booking) -> Result<(), DomainError> {
        self.state.lock().await.replace_booking(booking)
    }

    async fn update_within_capacity(
        &self,
        booking: &Booking,
        now: Timestamp,
    ) -> Result<GroupAdmission, DomainError> {
        let mut state = self.state.lock().await;

        if state.booking(PlanKind::Group, &booking.id).is_none() {
            return Err(DomainError::new(
                ErrorCode::BookingNotFound,
                "Booking not found",
            ));
        }

        let window = state
            .subscription(PlanKind::Group, &booking.subscription_id)
            .and_then(Subscription::capacity_window);

        match window {
            Some(window) if window.occupies_slot(booking, now) => {
                let active = window.count_active(
                    state.bookings.iter().filter(|b| {
                        b.kind == PlanKind::Group
                            && b.subscription_id == booking.subscription_id
                            && b.id != booking.id
                    }),
                    now,
                );
                if let AdmissionDecision::Full { capacity, active } = window.admit(active) {
                    return Ok(GroupAdmission::Full { capacity, active });
                }
            }
            Some(_) => {}
            None if booking.access_status.permits_entry() => {
                return Ok(GroupAdmission::SubscriptionMissing);
            }
            None => {}
        }

        state.replace_booking(booking)?;
        Ok(GroupAdmission::Admitted)
    }

    async fn find_by_id(
        &self,
        kind: PlanKind,
        id: &BookingId,
    ) -> Result<Option<Booking>, DomainError> {
        Ok(self.state.lock().await.booking(kind, id).cloned())
    }

    async fn delete(&self, kind: PlanKind, id: &BookingId) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        let before = state.bookings.len();
        state.bookings.retain(|b| !(b.kind == kind && &b.id == id));
        if state.bookings.len() == before {
            return Err(DomainError::new(
                ErrorCode::BookingNotFound,
                "Booking not found",
            ));
        }
        Ok(())
    }

    async fn list(
        &self,
        kind: PlanKind,
        filter: &BookingFilter,
    ) -> Result<Vec<Booking>, DomainError> {
        Ok(self
            .state
            .lock()
            .await
            .bookings
            .iter()
            .filter(|b| b.kind == kind && filter.matches(b))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AccessRepository for InMemoryStore {
    async fn record_if_granted(&self, record: &AccessRecord) -> Result<AccessGrant, DomainError> {
        let mut state = self.state.lock().await;

        let Some(booking) = state.booking(record.kind, &record.booking_id) else {
            return Ok(AccessGrant::BookingMissing);
        };
        if !booking.access_status.permits_entry() {
            return Ok(AccessGrant::NotGranted(booking.access_status));
        }

        state.access.push(record.clone());
        Ok(AccessGrant::Recorded(record.clone()))
    }

    async fn list_for_booking(
        &self,
        kind: PlanKind,
        booking_id: &BookingId,
    ) -> Result<Vec<AccessRecord>, DomainError> {
        Ok(self
            .state
            .lock()
            .await
            .access
            .iter()
            .filter(|r| r.kind == kind && &r.booking_id == booking_id)
            .cloned()
            .collect())
    }

    async fn check_in(
        &self,
        user_id: &UserId,
        facility_id: &FacilityId,
        now: Timestamp,
    ) -> Result<CheckInOutcome, DomainError> {
        let mut state = self.state.lock().await;

        let eligible = state
            .bookings
            .iter()
            .filter(|b| b.kind == PlanKind::Personal && &b.user_id == user_id)
            .filter(|b| {
                state
                    .subscription(PlanKind::Personal, &b.subscription_id)
                    .is_some_and(|s| &s.facility_id == facility_id)
            })
            .filter(|b| b.admits_entry_at(now))
            .max_by_key(|b| b.start_date)
            .map(|b| b.id);

        match eligible {
            Some(booking_id) => {
                state
                    .access
                    .push(AccessRecord::new(PlanKind::Personal, booking_id, now));
                Ok(CheckInOutcome::Granted)
            }
            None => Ok(CheckInOutcome::Denied),
        }
    }
}
