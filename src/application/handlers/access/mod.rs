//! Access handlers.
//!
//! ## Commands
//! - Record access against a granted booking
//! - Check in at a facility (personal bookings)
//!
//! ## Queries
//! - List a booking's access records

mod check_in;
mod list_access;
mod record_access;

// Commands
pub use check_in::{CheckInCommand, CheckInHandler, CheckInResult};
pub use record_access::{RecordAccessCommand, RecordAccessHandler, RecordAccessResult};

// Queries
pub use list_access::{ListAccessHandler, ListAccessQuery, ListAccessResult};
