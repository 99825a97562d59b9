//! HTTP handlers for subscription endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::subscription::{
    CreateSubscriptionCommand, DeleteSubscriptionCommand, GetSubscriptionQuery,
    ListSubscriptionsQuery, UpdateSubscriptionCommand,
};
use crate::domain::foundation::{FacilityId, PlanKind, SubscriptionId};
use crate::ports::SubscriptionFilter;

use super::dto::{
    ListSubscriptionsParams, SubscriptionListResponse, SubscriptionRequest, SubscriptionResponse,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// POST /api/subscriptions/:kind
pub async fn create_subscription(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    body: Result<Json<SubscriptionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let kind: PlanKind = kind.parse()?;
    let cmd = CreateSubscriptionCommand {
        terms: request.into_terms(kind)?,
    };

    let subscription = state.create_subscription_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubscriptionResponse::from(subscription)),
    ))
}

/// GET /api/subscriptions/:kind/:id
pub async fn get_subscription(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetSubscriptionQuery {
        kind: kind.parse()?,
        id: SubscriptionId::parse("id", &id)?,
    };

    let subscription = state.get_subscription_handler().handle(query).await?;
    Ok(Json(SubscriptionResponse::from(subscription)))
}

/// PUT /api/subscriptions/:kind/:id
pub async fn update_subscription(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    body: Result<Json<SubscriptionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let kind: PlanKind = kind.parse()?;
    let cmd = UpdateSubscriptionCommand {
        kind,
        id: SubscriptionId::parse("id", &id)?,
        terms: request.into_terms(kind)?,
    };

    let subscription = state.update_subscription_handler().handle(cmd).await?;
    Ok(Json(SubscriptionResponse::from(subscription)))
}

/// DELETE /api/subscriptions/:kind/:id
pub async fn delete_subscription(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = DeleteSubscriptionCommand {
        kind: kind.parse()?,
        id: SubscriptionId::parse("id", &id)?,
    };

    state.delete_subscription_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/subscriptions/:kind?facility_id=
pub async fn list_subscriptions(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<ListSubscriptionsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let facility_id = params
        .facility_id
        .as_deref()
        .map(|raw| FacilityId::parse("facility_id", raw))
        .transpose()?;
    let query = ListSubscriptionsQuery {
        kind: kind.parse()?,
        filter: SubscriptionFilter { facility_id },
    };

    let subscriptions = state.list_subscriptions_handler().handle(query).await?;

    Ok(Json(SubscriptionListResponse {
        subscriptions: subscriptions
            .into_iter()
            .map(SubscriptionResponse::from)
            .collect(),
    }))
}
