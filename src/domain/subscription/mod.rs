//! Subscription module - offerings sold by a gym.

mod aggregate;
mod errors;

pub use aggregate::{Offering, Subscription, SubscriptionTerms};
pub use errors::SubscriptionError;
