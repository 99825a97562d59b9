//! DeleteBookingHandler - Command handler for hard-deleting a booking.

use std::sync::Arc;

use crate::domain::booking::BookingError;
use crate::domain::foundation::{BookingId, ErrorCode, PlanKind};
use crate::ports::BookingRepository;

#[derive(Debug, Clone)]
pub struct DeleteBookingCommand {
    pub kind: PlanKind,
    pub id: BookingId,
}

pub struct DeleteBookingHandler {
    repository: Arc<dyn BookingRepository>,
}

impl DeleteBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteBookingCommand) -> Result<(), BookingError> {
        self.repository
            .delete(cmd.kind, &cmd.id)
            .await
            .map_err(|e| match e.code {
                ErrorCode::BookingNotFound => BookingError::not_found(cmd.kind, cmd.id),
                _ => e.into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::Booking;
    use crate::domain::foundation::{DomainError, Timestamp};
    use crate::ports::{BookingFilter, GroupAdmission};
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct MockBookingRepository {
        deleted: Mutex<Vec<BookingId>>,
        fail_delete: bool,
    }

    impl MockBookingRepository {
        fn new() -> Self {
            Self {
                deleted: Mutex::new(Vec::new()),
                fail_delete: false,
            }
        }

        fn failing() -> Self {
            Self {
                deleted: Mutex::new(Vec::new()),
                fail_delete: true,
            }
        }
    }

    #[async_trait]
    impl BookingRepository for MockBookingRepository {
        async fn save(&self, _booking: &Booking) -> Result<(), DomainError> {
            Ok(())
        }

        async fn save_within_capacity(
            &self,
            _booking: &Booking,
            _now: Timestamp,
        ) -> Result<GroupAdmission, DomainError> {
            Ok(GroupAdmission::Admitted)
        }

        async fn update(&self, _booking: &Booking) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update_within_capacity(
            &self,
            _booking: &Booking,
            _now: Timestamp,
        ) -> Result<GroupAdmission, DomainError> {
            Ok(GroupAdmission::Admitted)
        }

        async fn find_by_id(
            &self,
            _kind: PlanKind,
            _id: &BookingId,
        ) -> Result<Option<Booking>, DomainError> {
            Ok(None)
        }

        async fn delete(&self, _kind: PlanKind, id: &BookingId) -> Result<(), DomainError> {
            if self.fail_delete {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated delete failure",
                ));
            }
            let mut deleted = self.deleted.lock().unwrap();
            if deleted.contains(id) {
                return Err(DomainError::new(
                    ErrorCode::BookingNotFound,
                    "Booking not found",
                ));
            }
            deleted.push(*id);
            Ok(())
        }

        async fn list(
            &self,
            _kind: PlanKind,
            _filter: &BookingFilter,
        ) -> Result<Vec<Booking>, DomainError> {
            Ok(vec![])
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn second_delete_reports_not_found() {
        let handler = DeleteBookingHandler::new(Arc::new(MockBookingRepository::new()));
        let cmd = DeleteBookingCommand {
            kind: PlanKind::Group,
            id: BookingId::new(),
        };

        handler.handle(cmd.clone()).await.unwrap();
        let err = handler.handle(cmd.clone()).await.unwrap_err();

        assert_eq!(err, BookingError::not_found(PlanKind::Group, cmd.id));
    }

    #[tokio::test]
    async fn storage_failure_is_not_mistaken_for_not_found() {
        let handler = DeleteBookingHandler::new(Arc::new(MockBookingRepository::failing()));

        let err = handler
            .handle(DeleteBookingCommand {
                kind: PlanKind::Coach,
                id: BookingId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, BookingError::Infrastructure(_)));
    }
}
