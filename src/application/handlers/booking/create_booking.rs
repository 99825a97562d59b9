//! CreateBookingHandler - Command handler for booking a subscription.
//!
//! Personal and coach bookings are inserted directly. Group bookings go
//! through capacity admission: the repository counts the granted bookings
//! whose window covers the current instant and inserts only if a slot is free,
//! all in one atomic step.

use std::sync::Arc;

use crate::domain::booking::{Booking, BookingDraft, BookingError};
use crate::domain::foundation::{PlanKind, Timestamp};
use crate::ports::{BookingRepository, GroupAdmission};

/// Command to create a booking of the given kind.
#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub kind: PlanKind,
    pub draft: BookingDraft,
}

/// Result of successful booking creation: the stored record.
pub type CreateBookingResult = Booking;

/// Handler for creating bookings.
pub struct CreateBookingHandler {
    repository: Arc<dyn BookingRepository>,
}

impl CreateBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateBookingCommand) -> Result<CreateBookingResult, BookingError> {
        let now = Timestamp::now();
        let booking = Booking::create(cmd.kind, cmd.draft, now)?;

        match booking.kind {
            PlanKind::Group => self.admit(&booking, now).await?,
            PlanKind::Personal | PlanKind::Coach => {
                self.repository.save(&booking).await.map_err(|e| {
                    tracing::error!(kind = %booking.kind, error = %e, "Failed to save booking");
                    BookingError::from(e)
                })?
            }
        }

        tracing::debug!(kind = %booking.kind, booking_id = %booking.id, "Booking created");
        Ok(booking)
    }

    async fn admit(&self, booking: &Booking, now: Timestamp) -> Result<(), BookingError> {
        let admission = self
            .repository
            .save_within_capacity(booking, now)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to admit group booking");
                BookingError::from(e)
            })?;

        match admission {
            GroupAdmission::Admitted => Ok(()),
            GroupAdmission::SubscriptionMissing => Err(BookingError::subscription_not_found(
                booking.subscription_id,
            )),
            GroupAdmission::Full { capacity, active } => {
                tracing::info!(
                    subscription_id = %booking.subscription_id,
                    capacity,
                    active,
                    "Group booking rejected: no free slot"
                );
                Err(BookingError::capacity_exceeded(
                    booking.subscription_id,
                    capacity,
                    active,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::booking::AccessStatus;
    use crate::domain::foundation::{CoachId, FacilityId, SubscriptionId, UserId};
    use crate::domain::subscription::{Offering, Subscription, SubscriptionTerms};
    use crate::ports::SubscriptionRepository;

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    async fn store_with_group(capacity: i32) -> (Arc<InMemoryStore>, SubscriptionId) {
        let store = Arc::new(InMemoryStore::new());
        let subscription = Subscription::create(
            SubscriptionTerms {
                facility_id: FacilityId::new(),
                plan_type: "yoga".to_string(),
                description: "Morning flow".to_string(),
                price: 1500,
                duration_hours: 1,
                offering: Offering::Group {
                    coach_id: CoachId::new(),
                    capacity,
                    time: Timestamp::now(),
                    count: 10,
                },
            },
            Timestamp::now(),
        )
        .unwrap();
        SubscriptionRepository::save(store.as_ref(), &subscription)
            .await
            .unwrap();
        (store, subscription.id)
    }

    fn command(
        kind: PlanKind,
        subscription_id: SubscriptionId,
        status: AccessStatus,
        start_date: Timestamp,
    ) -> CreateBookingCommand {
        CreateBookingCommand {
            kind,
            draft: BookingDraft {
                subscription_id,
                user_id: UserId::new(),
                payment: 1500,
                access_status: status,
                start_date,
                count: 1,
            },
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Group Admission
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn second_granted_booking_exceeds_capacity_of_one() {
        let (store, sub) = store_with_group(1).await;
        let handler = CreateBookingHandler::new(store);
        let now = Timestamp::now();

        handler
            .handle(command(PlanKind::Group, sub, AccessStatus::Granted, now))
            .await
            .unwrap();
        let err = handler
            .handle(command(PlanKind::Group, sub, AccessStatus::Granted, now))
            .await
            .unwrap_err();

        assert_eq!(err, BookingError::capacity_exceeded(sub, 1, 1));
    }

    #[tokio::test]
    async fn pending_bookings_do_not_hold_slots() {
        let (store, sub) = store_with_group(1).await;
        let handler = CreateBookingHandler::new(store);
        let now = Timestamp::now();

        for _ in 0..3 {
            handler
                .handle(command(PlanKind::Group, sub, AccessStatus::Pending, now))
                .await
                .unwrap();
        }
        handler
            .handle(command(PlanKind::Group, sub, AccessStatus::Granted, now))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn elapsed_booking_frees_its_slot() {
        let (store, sub) = store_with_group(1).await;
        let handler = CreateBookingHandler::new(store);
        let earlier = Timestamp::now().add_minutes(-61);

        handler
            .handle(command(PlanKind::Group, sub, AccessStatus::Granted, earlier))
            .await
            .unwrap();
        handler
            .handle(command(
                PlanKind::Group,
                sub,
                AccessStatus::Granted,
                Timestamp::now(),
            ))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn group_booking_needs_existing_subscription() {
        let handler = CreateBookingHandler::new(Arc::new(InMemoryStore::new()));
        let missing = SubscriptionId::new();

        let err = handler
            .handle(command(
                PlanKind::Group,
                missing,
                AccessStatus::Granted,
                Timestamp::now(),
            ))
            .await
            .unwrap_err();

        assert_eq!(err, BookingError::SubscriptionNotFound(missing));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Unconstrained Kinds
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn personal_and_coach_bookings_are_not_capacity_checked() {
        let handler = CreateBookingHandler::new(Arc::new(InMemoryStore::new()));
        let sub = SubscriptionId::new();

        for kind in [PlanKind::Personal, PlanKind::Coach] {
            for _ in 0..3 {
                let booking = handler
                    .handle(command(kind, sub, AccessStatus::Granted, Timestamp::now()))
                    .await
                    .unwrap();
                assert_eq!(booking.kind, kind);
            }
        }
    }

    #[tokio::test]
    async fn negative_payment_is_rejected() {
        let handler = CreateBookingHandler::new(Arc::new(InMemoryStore::new()));
        let mut cmd = command(
            PlanKind::Personal,
            SubscriptionId::new(),
            AccessStatus::Pending,
            Timestamp::now(),
        );
        cmd.draft.payment = -1;

        let err = handler.handle(cmd).await.unwrap_err();
        assert!(matches!(err, BookingError::ValidationFailed { .. }));
    }
}
