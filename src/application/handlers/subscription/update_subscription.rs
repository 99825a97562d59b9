//! UpdateSubscriptionHandler - Command handler for replacing a subscription's terms.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, PlanKind, SubscriptionId, Timestamp};
use crate::domain::subscription::{Subscription, SubscriptionError, SubscriptionTerms};
use crate::ports::SubscriptionRepository;

/// Command to overwrite every mutable field of a subscription.
#[derive(Debug, Clone)]
pub struct UpdateSubscriptionCommand {
    pub kind: PlanKind,
    pub id: SubscriptionId,
    pub terms: SubscriptionTerms,
}

pub type UpdateSubscriptionResult = Subscription;

/// Handler for full-row subscription updates.
///
/// `created_at` is preserved and `updated_at` refreshed.
pub struct UpdateSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl UpdateSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSubscriptionCommand,
    ) -> Result<UpdateSubscriptionResult, SubscriptionError> {
        let mut subscription = self
            .repository
            .find_by_id(cmd.kind, &cmd.id)
            .await?
            .ok_or_else(|| SubscriptionError::not_found(cmd.id))?;

        subscription.replace_terms(cmd.terms, Timestamp::now())?;

        self.repository
            .update(&subscription)
            .await
            .map_err(|e| match e.code {
                ErrorCode::SubscriptionNotFound => SubscriptionError::not_found(cmd.id),
                _ => e.into(),
            })?;

        Ok(subscription)
    }
}
