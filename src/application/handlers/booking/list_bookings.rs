//! ListBookingsHandler - Query handler for bookings of one kind.

use std::sync::Arc;

use crate::domain::booking::{Booking, BookingError};
use crate::domain::foundation::PlanKind;
use crate::ports::{BookingFilter, BookingRepository};

#[derive(Debug, Clone)]
pub struct ListBookingsQuery {
    pub kind: PlanKind,
    pub filter: BookingFilter,
}

/// Matching bookings in creation order, possibly empty.
pub type ListBookingsResult = Vec<Booking>;

pub struct ListBookingsHandler {
    repository: Arc<dyn BookingRepository>,
}

impl ListBookingsHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListBookingsQuery) -> Result<ListBookingsResult, BookingError> {
        Ok(self.repository.list(query.kind, &query.filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::booking::{AccessStatus, BookingDraft};
    use crate::domain::foundation::{SubscriptionId, Timestamp, UserId};

    fn booking(user_id: UserId, subscription_id: SubscriptionId) -> Booking {
        Booking::create(
            PlanKind::Personal,
            BookingDraft {
                subscription_id,
                user_id,
                payment: 0,
                access_status: AccessStatus::Pending,
                start_date: Timestamp::now(),
                count: 0,
            },
            Timestamp::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn filters_by_user_and_subscription() {
        let store = Arc::new(InMemoryStore::new());
        let alice = UserId::new();
        let bob = UserId::new();
        let monthly = SubscriptionId::new();
        let yearly = SubscriptionId::new();

        let a1 = booking(alice, monthly);
        let a2 = booking(alice, yearly);
        let b1 = booking(bob, monthly);
        for b in [&a1, &a2, &b1] {
            store.save(b).await.unwrap();
        }

        let handler = ListBookingsHandler::new(store);
        let by_user = handler
            .handle(ListBookingsQuery {
                kind: PlanKind::Personal,
                filter: BookingFilter {
                    user_id: Some(alice),
                    subscription_id: None,
                },
            })
            .await
            .unwrap();
        assert_eq!(by_user, vec![a1.clone(), a2]);

        let by_both = handler
            .handle(ListBookingsQuery {
                kind: PlanKind::Personal,
                filter: BookingFilter {
                    user_id: Some(alice),
                    subscription_id: Some(monthly),
                },
            })
            .await
            .unwrap();
        assert_eq!(by_both, vec![a1]);
    }

    #[tokio::test]
    async fn other_kinds_are_not_listed() {
        let store = Arc::new(InMemoryStore::new());
        store
            .save(&booking(UserId::new(), SubscriptionId::new()))
            .await
            .unwrap();

        let listed = ListBookingsHandler::new(store)
            .handle(ListBookingsQuery {
                kind: PlanKind::Coach,
                filter: BookingFilter::default(),
            })
            .await
            .unwrap();
        assert!(listed.is_empty());
    }
}
