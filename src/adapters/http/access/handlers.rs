//! HTTP handlers for access endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::access::{CheckInCommand, ListAccessQuery, RecordAccessCommand};
use crate::domain::foundation::{BookingId, FacilityId, Timestamp, UserId};

use super::dto::{
    AccessListResponse, AccessRecordResponse, CheckInRequest, CheckInResponse,
    RecordAccessRequest,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// POST /api/access/:kind
///
/// 403 if the booking is not granted, 404 if it does not exist.
pub async fn record_access(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    body: Result<Json<RecordAccessRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let date = match request.date.as_deref() {
        Some(raw) => Timestamp::parse_rfc3339("date", raw)?,
        None => Timestamp::now(),
    };
    let cmd = RecordAccessCommand {
        kind: kind.parse()?,
        booking_id: BookingId::parse("booking_id", &request.booking_id)?,
        date,
    };

    let record = state.record_access_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(AccessRecordResponse::from(record))))
}

/// GET /api/access/:kind/:booking_id
pub async fn list_access(
    State(state): State<AppState>,
    Path((kind, booking_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListAccessQuery {
        kind: kind.parse()?,
        booking_id: BookingId::parse("booking_id", &booking_id)?,
    };

    let records = state.list_access_handler().handle(query).await?;

    Ok(Json(AccessListResponse {
        records: records.into_iter().map(AccessRecordResponse::from).collect(),
    }))
}

/// POST /api/access/check-in
///
/// Always 200 unless storage fails; denial is reported in the body.
pub async fn check_in(
    State(state): State<AppState>,
    body: Result<Json<CheckInRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let cmd = CheckInCommand {
        user_id: UserId::parse("user_id", &request.user_id)?,
        facility_id: FacilityId::parse("facility_id", &request.facility_id)?,
    };

    let outcome = state.check_in_handler().handle(cmd).await?;
    Ok(Json(CheckInResponse::from(outcome)))
}
