//! ListAccessHandler - Query handler for a booking's access history.

use std::sync::Arc;

use crate::domain::access::{AccessError, AccessRecord};
use crate::domain::foundation::{BookingId, PlanKind};
use crate::ports::AccessRepository;

#[derive(Debug, Clone)]
pub struct ListAccessQuery {
    pub kind: PlanKind,
    pub booking_id: BookingId,
}

/// Records in insertion order. An unknown booking simply has none.
pub type ListAccessResult = Vec<AccessRecord>;

pub struct ListAccessHandler {
    repository: Arc<dyn AccessRepository>,
}

impl ListAccessHandler {
    pub fn new(repository: Arc<dyn AccessRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListAccessQuery) -> Result<ListAccessResult, AccessError> {
        Ok(self
            .repository
            .list_for_booking(query.kind, &query.booking_id)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;

    #[tokio::test]
    async fn unknown_booking_has_empty_history() {
        let handler = ListAccessHandler::new(Arc::new(InMemoryStore::new()));

        let records = handler
            .handle(ListAccessQuery {
                kind: PlanKind::Coach,
                booking_id: BookingId::new(),
            })
            .await
            .unwrap();

        assert!(records.is_empty());
    }
}
