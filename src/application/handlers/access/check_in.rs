//! CheckInHandler - Gate terminal check-in for personal bookings.
//!
//! Answers "may this member enter this facility now?" and, on a yes, stamps
//! an access record dated at the moment of the call. A no is an ordinary
//! result, not an error.

use std::sync::Arc;

use crate::domain::access::{AccessError, CheckInOutcome};
use crate::domain::foundation::{FacilityId, Timestamp, UserId};
use crate::ports::AccessRepository;

#[derive(Debug, Clone)]
pub struct CheckInCommand {
    pub user_id: UserId,
    pub facility_id: FacilityId,
}

pub type CheckInResult = CheckInOutcome;

pub struct CheckInHandler {
    repository: Arc<dyn AccessRepository>,
}

impl CheckInHandler {
    pub fn new(repository: Arc<dyn AccessRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CheckInCommand) -> Result<CheckInResult, AccessError> {
        let outcome = self
            .repository
            .check_in(&cmd.user_id, &cmd.facility_id, Timestamp::now())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Check-in failed");
                AccessError::from(e)
            })?;

        if !outcome.is_granted() {
            tracing::info!(
                user_id = %cmd.user_id,
                facility_id = %cmd.facility_id,
                "Check-in denied"
            );
        }

        Ok(outcome)
    }
}
