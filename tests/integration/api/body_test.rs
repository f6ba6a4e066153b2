//! Request body rejection tests
//!
//! Bodies that cannot be decoded are answered with the same 400 field-error
//! shape as any other validation failure.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::assert_field_errors;
use crate::common::{register_unique_user, TestApp};

#[tokio::test]
async fn test_missing_content_type_is_a_field_error() {
    let app = TestApp::new();
    let response = app
        .send_raw(
            Method::POST,
            "/api/auth/login",
            None,
            None,
            r#"{"email":"a@x.com","password":"secret1"}"#,
        )
        .await;

    assert_field_errors!(response, ["body"]);
    assert_eq!(
        response.body["errors"][0]["msg"],
        "Content-Type must be application/json"
    );
}

#[tokio::test]
async fn test_malformed_json_is_a_field_error() {
    let app = TestApp::new();
    let response = app
        .send_raw(
            Method::POST,
            "/api/auth/register",
            None,
            Some("application/json"),
            r#"{"name": "Alice", "email": "#,
        )
        .await;

    assert_field_errors!(response, ["body"]);
    assert_eq!(response.body["errors"][0]["msg"], "Request body is not valid JSON");
}

#[tokio::test]
async fn test_wrongly_typed_field_is_a_field_error() {
    let app = TestApp::new();
    let response = app
        .post("/api/auth/login", None, json!({"email": 5, "password": "x"}))
        .await;

    assert_field_errors!(response, ["body"]);
    assert_eq!(response.body["errors"][0]["msg"], "Request body has invalid fields");
}

#[tokio::test]
async fn test_private_routes_reject_bad_bodies_after_auth() {
    let app = TestApp::new();
    let user = register_unique_user(&app, "Alice").await;

    let response = app.post("/api/posts", user.token(), json!({"text": 5})).await;
    assert_field_errors!(response, ["body"]);

    let response = app
        .send_raw(Method::POST, "/api/posts", user.token(), None, r#"{"text":"hi"}"#)
        .await;
    assert_field_errors!(response, ["body"]);

    let uri = format!("/api/profile/{}/experience", user.id);
    let response = app
        .send_raw(Method::PUT, &uri, user.token(), Some("application/json"), "[")
        .await;
    assert_field_errors!(response, ["body"]);

    // without a token the guard answers first
    let response = app.post("/api/posts", None, json!({"text": 5})).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
