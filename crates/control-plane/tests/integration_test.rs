// Router-level tests for the EventDeck API
// Run with: cargo test -p eventdeck-control-plane --test integration_test
// Uses the in-memory backend; no database or running server needed.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use eventdeck_control_plane::{
    auth::{AuthConfig, AuthMode},
    build_app,
    storage::StorageBackend,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

const PREFIX: &str = "/api";

fn app() -> Router {
    build_app(
        StorageBackend::in_memory(),
        AuthConfig::with_random_secret(),
        PREFIX,
        vec![],
    )
}

async fn send(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(format!("{PREFIX}{path}"));
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn register(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({"username": "planner", "email": email, "password": "s3cret-pass"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

fn launch_event() -> Value {
    json!({
        "name": "  Launch party  ",
        "date": "2025-06-01",
        "time": "18:00",
        "location": "Rooftop",
        "costs": [
            {"category": "Venue", "amount": 500},
            {"category": "Catering", "amount": 300, "status": "Paid"}
        ],
        "budget": {"total": 2000, "spent": 12345, "currency": "EUR"}
    })
}

#[tokio::test]
async fn test_event_lifecycle() {
    let app = app();
    let token = register(&app, "planner@example.com").await;
    let token = Some(token.as_str());

    // Create: spent is derived from costs, client value ignored
    let (status, created) = send(&app, Method::POST, "/events", token, Some(launch_event())).await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["name"], "Launch party");
    assert_eq!(created["status"], "Pending");
    assert_eq!(created["budget"]["spent"], 800.0);
    assert_eq!(created["budget"]["total"], 2000.0);
    assert_eq!(created["budget"]["currency"], "EUR");
    assert_eq!(created["costs"][1]["status"], "Paid");
    assert!(created["createdAt"].is_string());
    let id = created["id"].as_str().unwrap().to_string();

    // List and get
    let (status, list) = send(&app, Method::GET, "/events", token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, fetched) = send(&app, Method::GET, &format!("/events/{id}"), token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // Replace costs: spent recomputed
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/events/{id}"),
        token,
        Some(json!({"costs": [{"category": "Venue", "amount": 500}]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["budget"]["spent"], 500.0);
    assert_eq!(updated["budget"]["currency"], "EUR");

    // Status-only update leaves costs and spent alone
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/events/{id}"),
        token,
        Some(json!({"status": "In Progress"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "In Progress");
    assert_eq!(updated["costs"].as_array().unwrap().len(), 1);
    assert_eq!(updated["budget"]["spent"], 500.0);
    assert_eq!(updated["location"], "Rooftop");

    // Delete
    let (status, body) = send(&app, Method::DELETE, &format!("/events/{id}"), token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Event removed");

    let (status, body) = send(&app, Method::GET, &format!("/events/{id}"), token, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
    assert_eq!(body["message"], "Event not found");
}

#[tokio::test]
async fn test_event_validation_errors() {
    let app = app();
    let token = register(&app, "v@example.com").await;
    let token = Some(token.as_str());

    let mut missing_time = launch_event();
    missing_time["time"] = json!("");
    let (status, body) = send(&app, Method::POST, "/events", token, Some(missing_time)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation_error");
    assert!(body["message"].as_str().unwrap().starts_with("time"));

    let mut negative = launch_event();
    negative["costs"][1]["amount"] = json!(-5);
    let (status, body) = send(&app, Method::POST, "/events", token, Some(negative)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("costs[1].amount"));

    let mut bad_status = launch_event();
    bad_status["status"] = json!("Cancelled");
    let (status, body) = send(&app, Method::POST, "/events", token, Some(bad_status)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("status"));

    // Nothing was written
    let (_, list) = send(&app, Method::GET, "/events", token, None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = app();
    let token = register(&app, "json@example.com").await;

    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("{PREFIX}/events"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["kind"], "validation_error");
}

#[tokio::test]
async fn test_unknown_and_malformed_ids() {
    let app = app();
    let token = register(&app, "ids@example.com").await;
    let token = Some(token.as_str());
    let unknown = uuid::Uuid::now_v7();

    for path in [format!("/events/{unknown}"), "/events/not-a-uuid".to_string()] {
        let (status, body) = send(&app, Method::GET, &path, token, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(body["kind"], "not_found");

        let (status, _) = send(&app, Method::DELETE, &path, token, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");

        let (status, _) = send(
            &app,
            Method::PUT,
            &path,
            token,
            Some(json!({"location": "Hall B"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
    }

    let (status, body) = send(&app, Method::GET, "/inventory/123", token, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Inventory item not found");
}

#[tokio::test]
async fn test_requests_without_valid_token_are_rejected() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/events", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "auth_failure");
    assert_eq!(body["message"], "Not authorized, no token");

    let (status, body) = send(&app, Method::GET, "/events", Some("forged"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Not authorized, token failed");

    // Auth is checked before the body is looked at
    let (status, _) = send(&app, Method::POST, "/inventory", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A token from another deployment does not verify here
    let other = app_token_from_other_secret().await;
    let (status, _) = send(&app, Method::GET, "/events", Some(&other), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

async fn app_token_from_other_secret() -> String {
    let other = app();
    register(&other, "elsewhere@example.com").await
}

#[tokio::test]
async fn test_register_login_me() {
    let app = app();
    let token = register(&app, "Ada@Example.com").await;

    let (status, me) = send(&app, Method::GET, "/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "ada@example.com");
    assert_eq!(me["username"], "planner");
    assert!(me.get("token").is_none());

    // Duplicate email
    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({"username": "x", "email": "ada@example.com", "password": "p"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User with this email already exists");

    // Missing field
    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({"email": "new@example.com", "password": "p"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation_error");
    assert_eq!(
        body["message"],
        "Please provide all required fields: username, email, password"
    );

    // Login
    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({"email": "ada@example.com", "password": "s3cret-pass"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let login_token = body["token"].as_str().unwrap();
    let (status, _) = send(&app, Method::GET, "/events", Some(login_token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({"email": "ada@example.com", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_signup_can_be_disabled() {
    let app = build_app(
        StorageBackend::in_memory(),
        AuthConfig {
            disable_signup: true,
            ..AuthConfig::with_random_secret()
        },
        PREFIX,
        vec![],
    );
    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        None,
        Some(json!({"username": "a", "email": "a@example.com", "password": "p"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "auth_failure");
}

#[tokio::test]
async fn test_inventory_catalogue() {
    let app = app();
    let token = register(&app, "stock@example.com").await;
    let token = Some(token.as_str());

    let (status, item) = send(
        &app,
        Method::POST,
        "/inventory",
        token,
        Some(json!({"name": " Folding chair ", "quantity": 40, "unit": "pcs"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{item}");
    assert_eq!(item["name"], "Folding chair");
    let id = item["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/inventory/{id}"),
        token,
        Some(json!({"quantity": 35})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["quantity"], 35.0);
    assert_eq!(updated["unit"], "pcs");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/inventory/{id}"),
        token,
        Some(json!({"quantity": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("quantity"));

    let (status, list) = send(&app, Method::GET, "/inventory", token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, body) =
        send(&app, Method::DELETE, &format!("/inventory/{id}"), token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Inventory item removed");
}

#[tokio::test]
async fn test_auth_mode_none_allows_anonymous_access() {
    let app = build_app(
        StorageBackend::in_memory(),
        AuthConfig {
            mode: AuthMode::None,
            ..AuthConfig::with_random_secret()
        },
        "",
        vec![],
    );

    let request = Request::builder()
        .method(Method::POST)
        .uri("/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(launch_event().to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}
