//! CreateSubscriptionHandler - Command handler for publishing a new offering.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::subscription::{Subscription, SubscriptionError, SubscriptionTerms};
use crate::ports::SubscriptionRepository;

/// Command to create a subscription. The variant is carried by `terms.offering`.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    pub terms: SubscriptionTerms,
}

/// Result of successful subscription creation: the stored record.
pub type CreateSubscriptionResult = Subscription;

/// Handler for creating subscriptions of any kind.
pub struct CreateSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl CreateSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<CreateSubscriptionResult, SubscriptionError> {
        let subscription = Subscription::create(cmd.terms, Timestamp::now())?;
        self.repository.save(&subscription).await?;
        Ok(subscription)
    }
}
