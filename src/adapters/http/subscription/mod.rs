//! HTTP adapter for subscription CRUD.

mod dto;
mod handlers;
mod routes;

pub use dto::{SubscriptionListResponse, SubscriptionRequest, SubscriptionResponse};
pub use routes::subscription_routes;
