//! Axum router configuration for booking endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_booking, delete_booking, get_booking, list_bookings, update_booking};
use crate::adapters::http::state::AppState;

/// Create the booking API router, mounted at `/api/bookings`.
///
/// # Routes
/// - `POST /:kind` - Create a booking (capacity-checked for `group`)
/// - `GET /:kind` - List bookings, optionally by `user_id` and `subscription_id`
/// - `GET /:kind/:id` - Get one booking
/// - `PUT /:kind/:id` - Replace a booking, e.g. to grant access
/// - `DELETE /:kind/:id` - Delete a booking
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/:kind", get(list_bookings).post(create_booking))
        .route(
            "/:kind/:id",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
}
