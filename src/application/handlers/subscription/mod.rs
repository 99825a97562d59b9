//! Subscription handlers.
//!
//! Plain CRUD over the three offering kinds.
//!
//! ## Commands
//! - Create, update (full replace), delete
//!
//! ## Queries
//! - Get by id, list by facility

mod create_subscription;
mod delete_subscription;
mod get_subscription;
mod list_subscriptions;
mod update_subscription;

// Commands
pub use create_subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, CreateSubscriptionResult,
};
pub use delete_subscription::{DeleteSubscriptionCommand, DeleteSubscriptionHandler};
pub use update_subscription::{
    UpdateSubscriptionCommand, UpdateSubscriptionHandler, UpdateSubscriptionResult,
};

// Queries
pub use get_subscription::{GetSubscriptionHandler, GetSubscriptionQuery, GetSubscriptionResult};
pub use list_subscriptions::{
    ListSubscriptionsHandler, ListSubscriptionsQuery, ListSubscriptionsResult,
};
