//! GetBookingHandler - Query handler for a single booking.

use std::sync::Arc;

use crate::domain::booking::{Booking, BookingError};
use crate::domain::foundation::{BookingId, PlanKind};
use crate::ports::BookingRepository;

#[derive(Debug, Clone)]
pub struct GetBookingQuery {
    pub kind: PlanKind,
    pub id: BookingId,
}

pub type GetBookingResult = Booking;

pub struct GetBookingHandler {
    repository: Arc<dyn BookingRepository>,
}

impl GetBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetBookingQuery) -> Result<GetBookingResult, BookingError> {
        self.repository
            .find_by_id(query.kind, &query.id)
            .await?
            .ok_or_else(|| BookingError::not_found(query.kind, query.id))
    }
}
