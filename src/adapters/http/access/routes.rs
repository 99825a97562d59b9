//! Axum router configuration for access endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{check_in, list_access, record_access};
use crate::adapters::http::state::AppState;

/// Create the access API router, mounted at `/api/access`.
///
/// # Routes
/// - `POST /check-in` - Gate check-in for personal bookings
/// - `POST /:kind` - Record access against a granted booking
/// - `GET /:kind/:booking_id` - List a booking's access records
pub fn access_routes() -> Router<AppState> {
    Router::new()
        .route("/check-in", post(check_in))
        .route("/:kind", post(record_access))
        .route("/:kind/:booking_id", get(list_access))
}
