//! Authentication test helpers
//!
//! Registers users through the public API so tests exercise the same path
//! a client does.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::common::test_app::TestApp;

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

impl TestUser {
    pub fn token(&self) -> Option<&str> {
        Some(&self.token)
    }
}

/// Register a user and return its credentials and token
pub async fn register_user(app: &TestApp, name: &str, email: &str, password: &str) -> TestUser {
    let response = app
        .post(
            "/api/auth/register",
            None,
            json!({
                "name": name,
                "email": email,
                "password": password,
                "confirmPassword": password,
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "register failed: {}", response.body);

    let token = response.body["token"]
        .as_str()
        .expect("token in register response")
        .to_string();
    let id = app
        .state
        .tokens
        .verify(&token)
        .expect("register token verifies")
        .user
        .id;

    TestUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Register a user with a unique email
pub async fn register_unique_user(app: &TestApp, name: &str) -> TestUser {
    let email = format!("{}_{}@example.com", name.to_lowercase(), Uuid::new_v4().simple());
    register_user(app, name, &email, "secret1").await
}
