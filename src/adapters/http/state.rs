//! Shared application state for the HTTP adapter.

use std::sync::Arc;

use sqlx::PgPool;

use crate::adapters::memory::InMemoryStore;
use crate::adapters::postgres::{
    PostgresAccessRepository, PostgresBookingRepository, PostgresSubscriptionRepository,
};
use crate::application::handlers::access::{CheckInHandler, ListAccessHandler, RecordAccessHandler};
use crate::application::handlers::booking::{
    CreateBookingHandler, DeleteBookingHandler, GetBookingHandler, ListBookingsHandler,
    UpdateBookingHandler,
};
use crate::application::handlers::subscription::{
    CreateSubscriptionHandler, DeleteSubscriptionHandler, GetSubscriptionHandler,
    ListSubscriptionsHandler, UpdateSubscriptionHandler,
};
use crate::ports::{AccessRepository, BookingRepository, SubscriptionRepository};

/// Shared application state containing all dependencies.
///
/// Cloned for each request; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub subscription_repository: Arc<dyn SubscriptionRepository>,
    pub booking_repository: Arc<dyn BookingRepository>,
    pub access_repository: Arc<dyn AccessRepository>,
}

impl AppState {
    /// State backed by a single in-process store.
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            subscription_repository: store.clone(),
            booking_repository: store.clone(),
            access_repository: store,
        }
    }

    /// State backed by PostgreSQL; the repositories share one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            subscription_repository: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
            booking_repository: Arc::new(PostgresBookingRepository::new(pool.clone())),
            access_repository: Arc::new(PostgresAccessRepository::new(pool)),
        }
    }

    // === Subscriptions ===

    pub fn create_subscription_handler(&self) -> CreateSubscriptionHandler {
        CreateSubscriptionHandler::new(self.subscription_repository.clone())
    }

    pub fn get_subscription_handler(&self) -> GetSubscriptionHandler {
        GetSubscriptionHandler::new(self.subscription_repository.clone())
    }

    pub fn update_subscription_handler(&self) -> UpdateSubscriptionHandler {
        UpdateSubscriptionHandler::new(self.subscription_repository.clone())
    }

    pub fn delete_subscription_handler(&self) -> DeleteSubscriptionHandler {
        DeleteSubscriptionHandler::new(self.subscription_repository.clone())
    }

    pub fn list_subscriptions_handler(&self) -> ListSubscriptionsHandler {
        ListSubscriptionsHandler::new(self.subscription_repository.clone())
    }

    // === Bookings ===

    pub fn create_booking_handler(&self) -> CreateBookingHandler {
        CreateBookingHandler::new(self.booking_repository.clone())
    }

    pub fn get_booking_handler(&self) -> GetBookingHandler {
        GetBookingHandler::new(self.booking_repository.clone())
    }

    pub fn update_booking_handler(&self) -> UpdateBookingHandler {
        UpdateBookingHandler::new(self.booking_repository.clone())
    }

    pub fn delete_booking_handler(&self) -> DeleteBookingHandler {
        DeleteBookingHandler::new(self.booking_repository.clone())
    }

    pub fn list_bookings_handler(&self) -> ListBookingsHandler {
        ListBookingsHandler::new(self.booking_repository.clone())
    }

    // === Access ===

    pub fn record_access_handler(&self) -> RecordAccessHandler {
        RecordAccessHandler::new(self.access_repository.clone())
    }

    pub fn list_access_handler(&self) -> ListAccessHandler {
        ListAccessHandler::new(self.access_repository.clone())
    }

    pub fn check_in_handler(&self) -> CheckInHandler {
        CheckInHandler::new(self.access_repository.clone())
    }
}
