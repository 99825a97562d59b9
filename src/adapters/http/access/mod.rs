//! HTTP adapter for access records and check-in.

mod dto;
mod handlers;
mod routes;

pub use dto::{AccessListResponse, AccessRecordResponse, CheckInResponse};
pub use routes::access_routes;
