//! Axum router configuration for subscription endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_subscription, delete_subscription, get_subscription, list_subscriptions,
    update_subscription,
};
use crate::adapters::http::state::AppState;

/// Create the subscription API router, mounted at `/api/subscriptions`.
///
/// # Routes
/// - `POST /:kind` - Create a subscription
/// - `GET /:kind` - List subscriptions, optionally by `facility_id`
/// - `GET /:kind/:id` - Get one subscription
/// - `PUT /:kind/:id` - Replace a subscription
/// - `DELETE /:kind/:id` - Delete a subscription
pub fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route("/:kind", get(list_subscriptions).post(create_subscription))
        .route(
            "/:kind/:id",
            get(get_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        )
}
