//! UpdateBookingHandler - Command handler for replacing a booking.
//!
//! This is how an external authorization step grants (or revokes) access:
//! the caller rewrites the booking with a new `access_status`. Group
//! updates are re-admitted against the class capacity, so granting a pending
//! booking or moving one into the current window cannot overfill a class.

use std::sync::Arc;

use crate::domain::booking::{Booking, BookingDraft, BookingError};
use crate::domain::foundation::{BookingId, DomainError, ErrorCode, PlanKind, Timestamp};
use crate::ports::{BookingRepository, GroupAdmission};

#[derive(Debug, Clone)]
pub struct UpdateBookingCommand {
    pub kind: PlanKind,
    pub id: BookingId,
    pub draft: BookingDraft,
}

pub type UpdateBookingResult = Booking;

pub struct UpdateBookingHandler {
    repository: Arc<dyn BookingRepository>,
}

impl UpdateBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateBookingCommand) -> Result<UpdateBookingResult, BookingError> {
        let mut booking = self
            .repository
            .find_by_id(cmd.kind, &cmd.id)
            .await?
            .ok_or_else(|| BookingError::not_found(cmd.kind, cmd.id))?;

        let previous = booking.access_status;
        let now = Timestamp::now();
        booking.apply(cmd.draft, now)?;

        let not_found = |e: DomainError| match e.code {
            ErrorCode::BookingNotFound => BookingError::not_found(cmd.kind, cmd.id),
            _ => {
                tracing::error!(kind = %cmd.kind, error = %e, "Failed to update booking");
                e.into()
            }
        };

        match booking.kind {
            PlanKind::Group => {
                let admission = self
                    .repository
                    .update_within_capacity(&booking, now)
                    .await
                    .map_err(not_found)?;
                match admission {
                    GroupAdmission::Admitted => {}
                    GroupAdmission::SubscriptionMissing => {
                        return Err(BookingError::subscription_not_found(booking.subscription_id));
                    }
                    GroupAdmission::Full { capacity, active } => {
                        tracing::info!(
                            booking_id = %booking.id,
                            subscription_id = %booking.subscription_id,
                            capacity,
                            active,
                            "Group booking update rejected: class full"
                        );
                        return Err(BookingError::capacity_exceeded(
                            booking.subscription_id,
                            capacity,
                            active,
                        ));
                    }
                }
            }
            PlanKind::Personal | PlanKind::Coach => {
                self.repository.update(&booking).await.map_err(not_found)?;
            }
        }

        if previous != booking.access_status {
            tracing::info!(
                kind = %booking.kind,
                booking_id = %booking.id,
                from = %previous,
                to = %booking.access_status,
                "Booking access status changed"
            );
        }

        Ok(booking)
    }
}
