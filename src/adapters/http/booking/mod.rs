//! HTTP adapter for bookings.

mod dto;
mod handlers;
mod routes;

pub use dto::{BookingListResponse, BookingRequest, BookingResponse};
pub use routes::booking_routes;
