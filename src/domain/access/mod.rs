//! Access module - stamped entry events and the check-in outcome.

mod errors;
mod record;

pub use errors::AccessError;
pub use record::{AccessRecord, CheckInOutcome};
