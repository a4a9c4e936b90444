// tests/support/helpers.rs
use super::mocks::{self, MockClock};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use kareru::application::ports::time::Clock;
use kareru::application::services::ApplicationServices;
use kareru::domain::schedule::{EntropySource, ScheduleRepository};
use kareru::infrastructure::repositories::InMemoryScheduleRepository;
use kareru::infrastructure::security::entropy::OsEntropySource;
use kareru::presentation::http::routes::{RouterOptions, build_router};
use kareru::presentation::http::state::HttpState;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub struct TestApp {
    pub router: axum::Router,
    pub clock: Arc<MockClock>,
    pub services: Arc<ApplicationServices>,
}

pub fn build_services(
    repo: Arc<dyn ScheduleRepository>,
    entropy: Arc<dyn EntropySource>,
    clock: Arc<MockClock>,
) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = clock;
    Arc::new(ApplicationServices::new(repo, entropy, clock))
}

/// Router with mocks swapped in. Rate limiting is off: oneshot requests carry
/// no peer address for the limiter to key on.
pub fn make_test_app_with(
    repo: Arc<dyn ScheduleRepository>,
    entropy: Arc<dyn EntropySource>,
) -> TestApp {
    let clock = Arc::new(MockClock::default());
    let services = build_services(repo, entropy, Arc::clone(&clock));
    let state = HttpState {
        services: Arc::clone(&services),
    };
    TestApp {
        router: build_router(state, RouterOptions::default()),
        clock,
        services,
    }
}

pub fn make_test_app() -> TestApp {
    make_test_app_with(
        Arc::new(InMemoryScheduleRepository::new()),
        Arc::new(OsEntropySource),
    )
}

pub async fn make_test_router() -> axum::Router {
    make_test_app().router
}

/// Send a request; `body` is encoded as JSON when present.
pub async fn send(
    router: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> axum::response::Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    router.clone().oneshot(req).await.unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// `{startTime, endTime, available}` at hour offsets from the fixed test clock.
pub fn slot(start_hour: i64, end_hour: i64, available: bool) -> Value {
    let base = mocks::fixed_now();
    json!({
        "startTime": (base + chrono::Duration::hours(start_hour)).to_rfc3339(),
        "endTime": (base + chrono::Duration::hours(end_hour)).to_rfc3339(),
        "available": available,
    })
}

/// Create a schedule through the API and return the 201 body.
pub async fn create_schedule(router: &axum::Router, slots: Vec<Value>, comment: &str) -> Value {
    let resp = send(
        router,
        Method::POST,
        "/api/v1/schedules",
        Some(json!({ "timeSlots": slots, "comment": comment })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    read_json(resp).await
}

/// Assert that a response is an ErrorResponse JSON with the expected status, reason and code.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
    expected_code: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    let code_field = json.get("code").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert_eq!(code_field, expected_code, "unexpected code field: {}", code_field);
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
