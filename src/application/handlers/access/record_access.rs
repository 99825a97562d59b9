//! RecordAccessHandler - Command handler for the access-grant workflow.
//!
//! An access record is written only if its booking exists and is currently
//! granted. The status check and the insert happen in one repository call.

use std::sync::Arc;

use crate::domain::access::{AccessError, AccessRecord};
use crate::domain::foundation::{BookingId, PlanKind, Timestamp};
use crate::ports::{AccessGrant, AccessRepository};

/// Command to record one instant of access against a booking.
#[derive(Debug, Clone)]
pub struct RecordAccessCommand {
    pub kind: PlanKind,
    pub booking_id: BookingId,
    pub date: Timestamp,
}

/// The record as stored.
pub type RecordAccessResult = AccessRecord;

pub struct RecordAccessHandler {
    repository: Arc<dyn AccessRepository>,
}

impl RecordAccessHandler {
    pub fn new(repository: Arc<dyn AccessRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordAccessCommand) -> Result<RecordAccessResult, AccessError> {
        let record = AccessRecord::new(cmd.kind, cmd.booking_id, cmd.date);

        let grant = self
            .repository
            .record_if_granted(&record)
            .await
            .map_err(|e| {
                tracing::error!(kind = %cmd.kind, error = %e, "Failed to record access");
                AccessError::from(e)
            })?;

        match grant {
            AccessGrant::Recorded(stored) => Ok(stored),
            AccessGrant::BookingMissing => {
                Err(AccessError::booking_not_found(cmd.kind, cmd.booking_id))
            }
            AccessGrant::NotGranted(status) => {
                tracing::info!(
                    kind = %cmd.kind,
                    booking_id = %cmd.booking_id,
                    %status,
                    "Access denied"
                );
                Err(AccessError::access_denied(cmd.booking_id, status))
            }
        }
    }
}
