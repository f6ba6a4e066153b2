//! Authentication API integration tests
//!
//! Tests for registration, login, the current-user endpoint and the auth
//! middleware.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use devconnector::backend::auth::users::{get_user_by_email, User};
use devconnector::backend::store::Filter;

use crate::common::{register_user, TestApp};
use crate::{assert_field_errors, assert_msg, assert_status};

#[tokio::test]
async fn test_register_then_login_scenario() {
    let app = TestApp::new();
    let user = register_user(&app, "Alice", "a@x.com", "secret1").await;
    assert!(!user.token.is_empty());

    let response = app
        .post("/api/auth/login", None, json!({"email": "a@x.com", "password": "wrong"}))
        .await;
    assert_msg!(response, StatusCode::UNAUTHORIZED, "Invalid credentials");

    let response = app
        .post("/api/auth/login", None, json!({"email": "a@x.com", "password": "secret1"}))
        .await;
    assert_status!(response, StatusCode::OK);
    let token = response.body["token"].as_str().unwrap();
    assert_eq!(app.state.tokens.verify(token).unwrap().user.id, user.id);
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = TestApp::new();
    register_user(&app, "Alice", "a@x.com", "secret1").await;

    let response = app
        .post("/api/auth/login", None, json!({"email": "nobody@x.com", "password": "secret1"}))
        .await;
    assert_msg!(response, StatusCode::UNAUTHORIZED, "Invalid credentials");
}

#[tokio::test]
async fn test_login_validation() {
    let app = TestApp::new();
    let response = app.post("/api/auth/login", None, json!({"email": "nope"})).await;
    assert_field_errors!(response, ["email", "password"]);
}

#[tokio::test]
async fn test_register_mismatched_confirmation_creates_no_user() {
    let app = TestApp::new();
    let response = app
        .post(
            "/api/auth/register",
            None,
            json!({
                "name": "Alice",
                "email": "a@x.com",
                "password": "secret1",
                "confirmPassword": "secret2"
            }),
        )
        .await;
    assert_field_errors!(response, ["confirmPassword"]);

    assert!(get_user_by_email(app.store(), "a@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_register_reports_every_invalid_field() {
    let app = TestApp::new();
    let response = app.post("/api/auth/register", None, json!({"password": "123"})).await;
    assert_field_errors!(response, ["name", "email", "password", "confirmPassword"]);
}

#[tokio::test]
async fn test_register_duplicate_email_leaves_store_unchanged() {
    let app = TestApp::new();
    register_user(&app, "Alice", "a@x.com", "secret1").await;
    let before: Vec<User> = app.store().find_many(&Filter::all()).await.unwrap();

    let response = app
        .post(
            "/api/auth/register",
            None,
            json!({
                "name": "Other Alice",
                "email": "A@x.com",
                "password": "another1",
                "confirmPassword": "another1"
            }),
        )
        .await;
    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({"errors": [{"param": "email", "msg": "User already exists"}]})
    );

    let after: Vec<User> = app.store().find_many(&Filter::all()).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_current_user_hides_password_hash() {
    let app = TestApp::new();
    let user = register_user(&app, "Alice", "a@x.com", "secret1").await;

    let response = app.get("/api/auth", user.token()).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["id"], user.id.to_string());
    assert_eq!(response.body["name"], "Alice");
    assert_eq!(response.body["email"], "a@x.com");
    assert!(response.body["avatar"].as_str().unwrap().starts_with("https://www.gravatar.com/avatar/"));
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_current_user_requires_token() {
    let app = TestApp::new();
    let response = app.get("/api/auth", None).await;
    assert_msg!(response, StatusCode::UNAUTHORIZED, "Auth error");

    let response = app.get("/api/auth", Some("garbage")).await;
    assert_msg!(response, StatusCode::UNAUTHORIZED, "Auth error");
}

#[tokio::test]
async fn test_legacy_token_header_is_accepted() {
    let app = TestApp::new();
    let user = register_user(&app, "Alice", "a@x.com", "secret1").await;

    let request = axum::http::Request::builder()
        .uri("/api/auth")
        .header("x-auth-token", &user.token)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new();
    let user = register_user(&app, "Alice", "a@x.com", "secret1").await;
    let expired = app
        .state
        .tokens
        .issue_at(user.id, chrono::Utc::now() - chrono::Duration::hours(2))
        .unwrap();

    let response = app.get("/api/auth", Some(&expired)).await;
    assert_msg!(response, StatusCode::UNAUTHORIZED, "Auth error");
}

#[tokio::test]
async fn test_token_outlives_deleted_account() {
    let app = TestApp::new();
    let user = register_user(&app, "Alice", "a@x.com", "secret1").await;

    let response = app.delete("/api/profile", user.token()).await;
    assert_msg!(response, StatusCode::OK, "User deleted");

    // the token still verifies; the handler reports the missing account
    let response = app.get("/api/auth", user.token()).await;
    assert_status!(response, StatusCode::NOT_FOUND);
}
