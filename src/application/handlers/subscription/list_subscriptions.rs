//! ListSubscriptionsHandler - Query handler for subscriptions of one kind.

use std::sync::Arc;

use crate::domain::foundation::PlanKind;
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::{SubscriptionFilter, SubscriptionRepository};

#[derive(Debug, Clone)]
pub struct ListSubscriptionsQuery {
    pub kind: PlanKind,
    pub filter: SubscriptionFilter,
}

/// Matching subscriptions in creation order, possibly empty.
pub type ListSubscriptionsResult = Vec<Subscription>;

pub struct ListSubscriptionsHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl ListSubscriptionsHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListSubscriptionsQuery,
    ) -> Result<ListSubscriptionsResult, SubscriptionError> {
        Ok(self.repository.list(query.kind, &query.filter).await?)
    }
}
