//! HTTP integration tests.
//!
//! Drive the complete router (layers included) with `oneshot` requests over
//! the in-memory store and check status codes and JSON bodies.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use gym_booking::adapters::http::{app_router, AppState};
use gym_booking::adapters::memory::InMemoryStore;
use gym_booking::domain::foundation::{CoachId, FacilityId, Timestamp, UserId};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let store = Arc::new(InMemoryStore::new());
    app_router(AppState::in_memory(store), Duration::from_secs(5))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn minutes_ago(minutes: i64) -> String {
    Timestamp::now().add_minutes(-minutes).to_rfc3339()
}

async fn create_group_class(app: &Router, capacity: i32) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/subscriptions/group",
        Some(json!({
            "facility_id": FacilityId::new().to_string(),
            "type": "hiit",
            "description": "Evening HIIT",
            "price": 1500,
            "duration_hours": 1,
            "coach_id": CoachId::new().to_string(),
            "capacity": capacity,
            "time": Timestamp::now().to_rfc3339(),
            "count": 12
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_str().unwrap().to_string()
}

fn booking_body(subscription_id: &str, user_id: &str, status: &str, start: &str) -> Value {
    json!({
        "subscription_id": subscription_id,
        "user_id": user_id,
        "payment": 1500,
        "access_status": status,
        "start_date": start,
        "count": 1
    })
}

// =============================================================================
// Health and routing
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = app();
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

async fn send_raw(app: &Router, method: &str, uri: &str, raw: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn malformed_json_is_a_validation_error() {
    let app = app();
    for (method, uri) in [
        ("POST", "/api/subscriptions/personal"),
        ("POST", "/api/bookings/group"),
        ("PUT", "/api/bookings/coach/00000000-0000-0000-0000-000000000001"),
        ("POST", "/api/access/check-in"),
    ] {
        let (status, body) = send_raw(&app, method, uri, "{\"user_id\": ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(body["code"], "VALIDATION_FAILED", "{method} {uri}");
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}

#[tokio::test]
async fn wrongly_typed_field_is_a_validation_error() {
    let app = app();
    let (status, body) = send_raw(
        &app,
        "POST",
        "/api/access/group",
        r#"{"booking_id": 42}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn unknown_kind_is_a_bad_request() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/bookings/yoga", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

// =============================================================================
// Subscriptions
// =============================================================================

#[tokio::test]
async fn subscription_crud_roundtrip() {
    let app = app();
    let facility = FacilityId::new().to_string();

    let (status, created) = send(
        &app,
        "POST",
        "/api/subscriptions/personal",
        Some(json!({
            "facility_id": facility,
            "plan_type": "monthly",
            "price": 3000,
            "duration_hours": 720,
            "count": 20
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["kind"], "personal");
    assert_eq!(created["count"], 20);
    assert!(created.get("capacity").is_none());
    let id = created["id"].as_str().unwrap();

    let (status, listed) = send(
        &app,
        "GET",
        &format!("/api/subscriptions/personal?facility_id={facility}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["subscriptions"].as_array().unwrap().len(), 1);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/subscriptions/personal/{id}"),
        Some(json!({
            "facility_id": facility,
            "plan_type": "monthly",
            "price": 3500,
            "duration_hours": 720,
            "count": 20
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 3500);
    assert_eq!(updated["created_at"], created["created_at"]);

    let (status, _) = send(&app, "DELETE", &format!("/api/subscriptions/personal/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/api/subscriptions/personal/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SUBSCRIPTION_NOT_FOUND");
}

#[tokio::test]
async fn group_subscription_requires_positive_capacity() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/subscriptions/group",
        Some(json!({
            "facility_id": FacilityId::new().to_string(),
            "type": "hiit",
            "price": 1500,
            "duration_hours": 1,
            "coach_id": CoachId::new().to_string(),
            "capacity": 0,
            "time": Timestamp::now().to_rfc3339(),
            "count": 12
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

// =============================================================================
// Bookings
// =============================================================================

#[tokio::test]
async fn full_group_class_returns_conflict() {
    let app = app();
    let class = create_group_class(&app, 1).await;

    let (status, first) = send(
        &app,
        "POST",
        "/api/bookings/group",
        Some(booking_body(&class, &UserId::new().to_string(), "granted", &minutes_ago(5))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["access_status"], "granted");

    let (status, body) = send(
        &app,
        "POST",
        "/api/bookings/group",
        Some(booking_body(&class, &UserId::new().to_string(), "granted", &minutes_ago(1))),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CAPACITY_EXCEEDED");
}

#[tokio::test]
async fn granting_into_full_group_class_returns_conflict() {
    let app = app();
    let class = create_group_class(&app, 1).await;
    let start = minutes_ago(5);

    let mut pending = Vec::new();
    for _ in 0..2 {
        let user = UserId::new().to_string();
        let (status, booking) = send(
            &app,
            "POST",
            "/api/bookings/group",
            Some(booking_body(&class, &user, "pending", &start)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        pending.push((booking["id"].as_str().unwrap().to_string(), user));
    }

    let (first_id, first_user) = &pending[0];
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/bookings/group/{first_id}"),
        Some(booking_body(&class, first_user, "granted", &start)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (second_id, second_user) = &pending[1];
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/bookings/group/{second_id}"),
        Some(booking_body(&class, second_user, "granted", &start)),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CAPACITY_EXCEEDED");

    let (_, still_pending) = send(&app, "GET", &format!("/api/bookings/group/{second_id}"), None).await;
    assert_eq!(still_pending["access_status"], "pending");
}

#[tokio::test]
async fn group_booking_for_missing_class_is_not_found() {
    let app = app();
    let missing = uuid_string();
    let (status, body) = send(
        &app,
        "POST",
        "/api/bookings/group",
        Some(booking_body(&missing, &UserId::new().to_string(), "granted", &minutes_ago(1))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SUBSCRIPTION_NOT_FOUND");
}

#[tokio::test]
async fn booking_list_filters_by_user() {
    let app = app();
    let user = UserId::new().to_string();
    let plan = uuid_string();

    for _ in 0..2 {
        send(
            &app,
            "POST",
            "/api/bookings/coach",
            Some(booking_body(&plan, &user, "pending", &minutes_ago(0))),
        )
        .await;
    }
    send(
        &app,
        "POST",
        "/api/bookings/coach",
        Some(booking_body(&plan, &UserId::new().to_string(), "pending", &minutes_ago(0))),
    )
    .await;

    let (status, body) = send(&app, "GET", &format!("/api/bookings/coach?user_id={user}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookings"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, "GET", "/api/bookings/personal", None).await;
    assert_eq!(body, json!({ "bookings": [] }));
}

#[tokio::test]
async fn deleting_missing_booking_is_not_found() {
    let app = app();
    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/bookings/personal/{}", uuid_string()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "BOOKING_NOT_FOUND");
}

// =============================================================================
// Access
// =============================================================================

#[tokio::test]
async fn access_follows_booking_status() {
    let app = app();
    let user = UserId::new().to_string();
    let plan = uuid_string();
    let (_, booking) = send(
        &app,
        "POST",
        "/api/bookings/coach",
        Some(booking_body(&plan, &user, "pending", &minutes_ago(10))),
    )
    .await;
    let booking_id = booking["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "POST",
        "/api/access/coach",
        Some(json!({ "booking_id": booking_id })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "ACCESS_DENIED");

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/bookings/coach/{booking_id}"),
        Some(booking_body(&plan, &user, "granted", &minutes_ago(10))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, record) = send(
        &app,
        "POST",
        "/api/access/coach",
        Some(json!({ "booking_id": booking_id, "date": "2026-03-01T08:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["booking_id"], booking_id.as_str());

    let (status, listed) = send(&app, "GET", &format!("/api/access/coach/{booking_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["records"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn access_for_missing_booking_is_not_found() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/access/group",
        Some(json!({ "booking_id": uuid_string() })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "BOOKING_NOT_FOUND");
}

#[tokio::test]
async fn check_in_reports_granted_or_denied() {
    let app = app();
    let facility = FacilityId::new().to_string();
    let user = UserId::new().to_string();

    let (_, body) = send(
        &app,
        "POST",
        "/api/access/check-in",
        Some(json!({ "user_id": user, "facility_id": facility })),
    )
    .await;
    assert_eq!(body, json!({ "message": "denied" }));

    let (_, plan) = send(
        &app,
        "POST",
        "/api/subscriptions/personal",
        Some(json!({
            "facility_id": facility,
            "plan_type": "ten-pass",
            "price": 9000,
            "duration_hours": 2,
            "count": 10
        })),
    )
    .await;
    let plan_id = plan["id"].as_str().unwrap();
    let (_, booking) = send(
        &app,
        "POST",
        "/api/bookings/personal",
        Some(booking_body(plan_id, &user, "granted", &minutes_ago(15))),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/access/check-in",
        Some(json!({ "user_id": user, "facility_id": facility })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "granted" }));

    let booking_id = booking["id"].as_str().unwrap();
    let (_, listed) = send(&app, "GET", &format!("/api/access/personal/{booking_id}"), None).await;
    assert_eq!(listed["records"].as_array().unwrap().len(), 1);
}

fn uuid_string() -> String {
    FacilityId::new().to_string()
}
