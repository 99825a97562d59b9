//! Booking module - members' claims against subscriptions.
//!
//! Holds the booking aggregate, the closed [`AccessStatus`] enumeration and
//! the capacity admission rule for group bookings.

mod admission;
mod aggregate;
mod errors;
mod status;

pub use admission::{AdmissionDecision, CapacityWindow};
pub use aggregate::{Booking, BookingDraft};
pub use errors::BookingError;
pub use status::AccessStatus;
