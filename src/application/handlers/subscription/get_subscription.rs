//! GetSubscriptionHandler - Query handler for a single subscription.

use std::sync::Arc;

use crate::domain::foundation::{PlanKind, SubscriptionId};
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

/// Query for one subscription of a given kind.
#[derive(Debug, Clone)]
pub struct GetSubscriptionQuery {
    pub kind: PlanKind,
    pub id: SubscriptionId,
}

pub type GetSubscriptionResult = Subscription;

pub struct GetSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl GetSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetSubscriptionQuery,
    ) -> Result<GetSubscriptionResult, SubscriptionError> {
        self.repository
            .find_by_id(query.kind, &query.id)
            .await?
            .ok_or_else(|| SubscriptionError::not_found(query.id))
    }
}
