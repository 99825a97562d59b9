//! DeleteSubscriptionHandler - Command handler for hard-deleting a subscription.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, PlanKind, SubscriptionId};
use crate::domain::subscription::SubscriptionError;
use crate::ports::SubscriptionRepository;

#[derive(Debug, Clone)]
pub struct DeleteSubscriptionCommand {
    pub kind: PlanKind,
    pub id: SubscriptionId,
}

pub struct DeleteSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl DeleteSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteSubscriptionCommand) -> Result<(), SubscriptionError> {
        self.repository
            .delete(cmd.kind, &cmd.id)
            .await
            .map_err(|e| match e.code {
                ErrorCode::SubscriptionNotFound => SubscriptionError::not_found(cmd.id),
                _ => e.into(),
            })
    }
}
