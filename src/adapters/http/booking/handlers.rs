//! HTTP handlers for booking endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::booking::{
    CreateBookingCommand, DeleteBookingCommand, GetBookingQuery, ListBookingsQuery,
    UpdateBookingCommand,
};
use crate::domain::foundation::{BookingId, SubscriptionId, UserId};
use crate::ports::BookingFilter;

use super::dto::{BookingListResponse, BookingRequest, BookingResponse, ListBookingsParams};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// POST /api/bookings/:kind
///
/// Group bookings answer 409 when the class is full and 404 when the
/// subscription does not exist.
pub async fn create_booking(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    body: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let cmd = CreateBookingCommand {
        kind: kind.parse()?,
        draft: request.into_draft()?,
    };

    let booking = state.create_booking_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(BookingResponse::from(booking))))
}

/// GET /api/bookings/:kind/:id
pub async fn get_booking(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetBookingQuery {
        kind: kind.parse()?,
        id: BookingId::parse("id", &id)?,
    };

    let booking = state.get_booking_handler().handle(query).await?;
    Ok(Json(BookingResponse::from(booking)))
}

/// PUT /api/bookings/:kind/:id
pub async fn update_booking(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    body: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let cmd = UpdateBookingCommand {
        kind: kind.parse()?,
        id: BookingId::parse("id", &id)?,
        draft: request.into_draft()?,
    };

    let booking = state.update_booking_handler().handle(cmd).await?;
    Ok(Json(BookingResponse::from(booking)))
}

/// DELETE /api/bookings/:kind/:id
pub async fn delete_booking(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteBookingCommand {
        kind: kind.parse()?,
        id: BookingId::parse("id", &id)?,
    };

    state.delete_booking_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/bookings/:kind?user_id=&subscription_id=
pub async fn list_bookings(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<ListBookingsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = BookingFilter {
        user_id: params
            .user_id
            .as_deref()
            .map(|raw| UserId::parse("user_id", raw))
            .transpose()?,
        subscription_id: params
            .subscription_id
            .as_deref()
            .map(|raw| SubscriptionId::parse("subscription_id", raw))
            .transpose()?,
    };
    let query = ListBookingsQuery {
        kind: kind.parse()?,
        filter,
    };

    let bookings = state.list_bookings_handler().handle(query).await?;

    Ok(Json(BookingListResponse {
        bookings: bookings.into_iter().map(BookingResponse::from).collect(),
    }))
}
