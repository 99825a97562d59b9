//! Subscription repository port.
//!
//! Plain persistence for the three offering variants. No business rule is
//! attached here beyond existence checks.

use crate::domain::foundation::{DomainError, FacilityId, PlanKind, SubscriptionId};
use crate::domain::subscription::Subscription;
use async_trait::async_trait;

/// Optional equality filters for listing subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionFilter {
    pub facility_id: Option<FacilityId>,
}

/// Repository port for subscription persistence.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Insert a new subscription into the table for its kind.
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Replace every column of an existing subscription.
    ///
    /// # Errors
    ///
    /// - `SubscriptionNotFound` if no row has this id
    /// - `DatabaseError` on persistence failure
    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Find a subscription by kind and id. Returns `None` if absent.
    async fn find_by_id(
        &self,
        kind: PlanKind,
        id: &SubscriptionId,
    ) -> Result<Option<Subscription>, DomainError>;

    /// Hard-delete a subscription.
    ///
    /// # Errors
    ///
    /// - `SubscriptionNotFound` if no row was deleted
    async fn delete(&self, kind: PlanKind, id: &SubscriptionId) -> Result<(), DomainError>;

    /// List subscriptions of a kind in creation order.
    async fn list(
        &self,
        kind: PlanKind,
        filter: &SubscriptionFilter,
    ) -> Result<Vec<Subscription>, DomainError>;
}
