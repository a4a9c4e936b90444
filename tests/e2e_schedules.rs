use axum::http::{Method, StatusCode};
use chrono::Duration;
use serde_json::json;

mod support;

use support::{assert_error_response, create_schedule, make_test_app, read_json, send, slot};

/// 作成 → 公開リンクで取得 → 正しいトークンで削除 → 404 の一連の流れを確認する
#[tokio::test]
async fn e2e_create_get_delete_lifecycle() {
    let app = make_test_app();

    let created = create_schedule(&app.router, vec![slot(1, 2, true)], "team lunch").await;
    let id = created["id"].as_str().unwrap().to_string();
    let token = created["editToken"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_eq!(created["timeSlots"].as_array().unwrap().len(), 1);
    assert_eq!(created["comment"], "team lunch");

    let resp = send(&app.router, Method::GET, &format!("/api/v1/schedules/{id}"), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let view = read_json(resp).await;
    assert_eq!(view["id"], id.as_str());
    assert!(view.get("editToken").is_none());
    assert_eq!(view["timeSlots"][0]["available"], true);

    let resp = send(
        &app.router,
        Method::DELETE,
        &format!("/api/v1/schedules/{id}"),
        Some(json!({ "editToken": token })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&app.router, Method::GET, &format!("/api/v1/schedules/{id}"), None).await;
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found", "NOT_FOUND").await;
}

/// 作成から 7 日を過ぎた予定は 410 Gone になることを確認する
#[tokio::test]
async fn e2e_expired_schedule_returns_410() {
    let app = make_test_app();
    let created = create_schedule(&app.router, vec![slot(1, 2, true)], "").await;
    let id = created["id"].as_str().unwrap();

    app.clock.advance(Duration::days(6));
    let resp = send(&app.router, Method::GET, &format!("/api/v1/schedules/{id}"), None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    app.clock.advance(Duration::days(2));
    let resp = send(&app.router, Method::GET, &format!("/api/v1/schedules/{id}"), None).await;
    assert_error_response(resp, StatusCode::GONE, "Gone", "EXPIRED").await;
}

/// 期限ちょうどはまだ有効で、1 秒後に期限切れになることを確認する
#[tokio::test]
async fn e2e_expiry_boundary_is_exclusive() {
    let app = make_test_app();
    let created = create_schedule(&app.router, vec![], "").await;
    let id = created["id"].as_str().unwrap();

    app.clock.advance(Duration::days(7));
    let resp = send(&app.router, Method::GET, &format!("/api/v1/schedules/{id}"), None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    app.clock.advance(Duration::seconds(1));
    let resp = send(&app.router, Method::GET, &format!("/api/v1/schedules/{id}"), None).await;
    assert_eq!(resp.status(), StatusCode::GONE);
}

/// 正しいトークンでの更新は枠を丸ごと置き換え、期限は変わらないことを確認する
#[tokio::test]
async fn e2e_update_replaces_slots_and_keeps_expiry() {
    let app = make_test_app();
    let created = create_schedule(&app.router, vec![slot(1, 2, true)], "draft").await;
    let id = created["id"].as_str().unwrap();
    let token = created["editToken"].as_str().unwrap();

    app.clock.advance(Duration::days(1));
    let resp = send(
        &app.router,
        Method::PUT,
        &format!("/api/v1/schedules/{id}"),
        Some(json!({
            "editToken": token,
            "timeSlots": [slot(30, 31, false), slot(31, 32, true)],
            "comment": "final",
        })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert_eq!(updated["comment"], "final");
    assert_eq!(updated["timeSlots"].as_array().unwrap().len(), 2);
    assert_eq!(updated["expiresAt"], created["expiresAt"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert!(updated.get("editToken").is_none());
}

/// トークンなしの更新は 401、誤ったトークンは 403 を返すことを確認する
#[tokio::test]
async fn e2e_update_requires_matching_token() {
    let app = make_test_app();
    let created = create_schedule(&app.router, vec![slot(1, 2, true)], "").await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("/api/v1/schedules/{id}");

    let resp = send(
        &app.router,
        Method::PUT,
        &uri,
        Some(json!({ "timeSlots": [slot(3, 4, true)] })),
    )
    .await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized", "UNAUTHORIZED").await;

    let resp = send(
        &app.router,
        Method::PUT,
        &uri,
        Some(json!({ "editToken": "", "timeSlots": [] })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let wrong = "0".repeat(64);
    let resp = send(
        &app.router,
        Method::PUT,
        &uri,
        Some(json!({ "editToken": wrong, "timeSlots": [slot(3, 4, true)] })),
    )
    .await;
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden", "FORBIDDEN").await;

    // the rejected attempts left the schedule untouched
    let view = read_json(send(&app.router, Method::GET, &uri, None).await).await;
    assert_eq!(view["timeSlots"], created["timeSlots"]);
}

/// 削除もトークンなしは 401、誤ったトークンは 403 を返すことを確認する
#[tokio::test]
async fn e2e_delete_requires_matching_token() {
    let app = make_test_app();
    let created = create_schedule(&app.router, vec![], "").await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("/api/v1/schedules/{id}");

    let resp = send(&app.router, Method::DELETE, &uri, None).await;
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized", "UNAUTHORIZED").await;

    let resp = send(
        &app.router,
        Method::DELETE,
        &uri,
        Some(json!({ "editToken": "f".repeat(64) })),
    )
    .await;
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden", "FORBIDDEN").await;

    let resp = send(&app.router, Method::GET, &uri, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

/// 検査順序: 401 → 404 → 410 → 403 → 400
#[tokio::test]
async fn e2e_authorization_checks_run_in_order() {
    let app = make_test_app();
    let created = create_schedule(&app.router, vec![], "").await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("/api/v1/schedules/{id}");
    let overlapping = json!([slot(1, 3, true), slot(2, 4, true)]);

    // missing token wins over a missing schedule
    let resp = send(
        &app.router,
        Method::PUT,
        "/api/v1/schedules/does-not-exist",
        Some(json!({ "timeSlots": overlapping })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // missing schedule wins over a wrong token
    let resp = send(
        &app.router,
        Method::PUT,
        "/api/v1/schedules/does-not-exist",
        Some(json!({ "editToken": "abc", "timeSlots": overlapping })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // wrong token wins over invalid slots
    let resp = send(
        &app.router,
        Method::PUT,
        &uri,
        Some(json!({ "editToken": "abc", "timeSlots": overlapping })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // expiry wins over a wrong token
    app.clock.advance(Duration::days(8));
    let resp = send(
        &app.router,
        Method::PUT,
        &uri,
        Some(json!({ "editToken": "abc", "timeSlots": overlapping })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::GONE);
}

/// 期限切れの予定は正しいトークンでも編集・削除できないことを確認する
#[tokio::test]
async fn e2e_expired_schedule_cannot_be_edited_or_deleted() {
    let app = make_test_app();
    let created = create_schedule(&app.router, vec![], "").await;
    let id = created["id"].as_str().unwrap();
    let token = created["editToken"].as_str().unwrap();
    let uri = format!("/api/v1/schedules/{id}");

    app.clock.advance(Duration::days(8));

    let resp = send(
        &app.router,
        Method::PUT,
        &uri,
        Some(json!({ "editToken": token, "timeSlots": [] })),
    )
    .await;
    assert_error_response(resp, StatusCode::GONE, "Gone", "EXPIRED").await;

    let resp = send(
        &app.router,
        Method::DELETE,
        &uri,
        Some(json!({ "editToken": token })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::GONE);
}
