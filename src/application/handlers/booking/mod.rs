//! Booking handlers.
//!
//! ## Commands
//! - Create (capacity-gated for group bookings)
//! - Update (full replace, including access status)
//! - Delete
//!
//! ## Queries
//! - Get by id, list by user and subscription

mod create_booking;
mod delete_booking;
mod get_booking;
mod list_bookings;
mod update_booking;

// Commands
pub use create_booking::{CreateBookingCommand, CreateBookingHandler, CreateBookingResult};
pub use delete_booking::{DeleteBookingCommand, DeleteBookingHandler};
pub use update_booking::{UpdateBookingCommand, UpdateBookingHandler, UpdateBookingResult};

// Queries
pub use get_booking::{GetBookingHandler, GetBookingQuery, GetBookingResult};
pub use list_bookings::{ListBookingsHandler, ListBookingsQuery, ListBookingsResult};
