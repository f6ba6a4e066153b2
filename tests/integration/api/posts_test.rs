//! Posts API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{register_unique_user, TestApp, TestUser};
use crate::{assert_field_errors, assert_msg, assert_status};

async fn create_post(app: &TestApp, user: &TestUser, text: &str) -> Value {
    let response = app.post("/api/posts", user.token(), json!({"text": text})).await;
    assert_status!(response, StatusCode::OK);
    response.body
}

#[tokio::test]
async fn test_posts_require_token() {
    let app = TestApp::new();
    assert_msg!(app.get("/api/posts", None).await, StatusCode::UNAUTHORIZED, "Auth error");
    assert_msg!(
        app.post("/api/posts", None, json!({"text": "hi"})).await,
        StatusCode::UNAUTHORIZED,
        "Auth error"
    );
}

#[tokio::test]
async fn test_create_post_snapshots_author() {
    let app = TestApp::new();
    let user = register_unique_user(&app, "Alice").await;

    let post = create_post(&app, &user, "Hello").await;
    assert_eq!(post["text"], "Hello");
    assert_eq!(post["name"], "Alice");
    assert_eq!(post["user"], user.id.to_string());
    assert_eq!(post["likes"], json!([]));
    assert_eq!(post["comments"], json!([]));

    let response = app.post("/api/posts", user.token(), json!({"text": ""})).await;
    assert_field_errors!(response, ["text"]);
}

#[tokio::test]
async fn test_list_and_get_posts() {
    let app = TestApp::new();
    let user = register_unique_user(&app, "Alice").await;
    let first = create_post(&app, &user, "first").await;
    let second = create_post(&app, &user, "second").await;

    let response = app.get("/api/posts", user.token()).await;
    assert_status!(response, StatusCode::OK);
    let ids: Vec<&Value> = response.body.as_array().unwrap().iter().map(|p| &p["id"]).collect();
    assert_eq!(ids, vec![&second["id"], &first["id"]]);

    let uri = format!("/api/posts/{}", first["id"].as_str().unwrap());
    let response = app.get(&uri, user.token()).await;
    assert_eq!(response.body, first);

    let response = app.get(&format!("/api/posts/{}", Uuid::new_v4()), user.token()).await;
    assert_msg!(response, StatusCode::NOT_FOUND, "no post exists");

    let response = app.get("/api/posts/5d1f3a", user.token()).await;
    assert_msg!(response, StatusCode::NOT_FOUND, "no post exists");
}

#[tokio::test]
async fn test_non_owner_delete_is_forbidden() {
    let app = TestApp::new();
    let owner = register_unique_user(&app, "Alice").await;
    let other = register_unique_user(&app, "Bob").await;
    let post = create_post(&app, &owner, "mine").await;
    let uri = format!("/api/posts/{}", post["id"].as_str().unwrap());

    let response = app.delete(&uri, other.token()).await;
    assert_msg!(response, StatusCode::FORBIDDEN, "user not authorized");
    assert_eq!(app.get(&uri, other.token()).await.body, post);

    let response = app.delete(&uri, owner.token()).await;
    assert_msg!(response, StatusCode::OK, "post successfully removed");
    assert_status!(app.get(&uri, owner.token()).await, StatusCode::NOT_FOUND);
    assert_status!(app.delete(&uri, owner.token()).await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_like_and_unlike() {
    let app = TestApp::new();
    let author = register_unique_user(&app, "Alice").await;
    let fan = register_unique_user(&app, "Bob").await;
    let post = create_post(&app, &author, "like me").await;
    let id = post["id"].as_str().unwrap();

    let response = app.put(&format!("/api/posts/{id}/unlike"), fan.token(), None).await;
    assert_msg!(response, StatusCode::BAD_REQUEST, "post not liked yet");

    let response = app.put(&format!("/api/posts/{id}/like"), fan.token(), None).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, json!([{"user": fan.id.to_string()}]));

    let response = app.put(&format!("/api/posts/{id}/like"), fan.token(), None).await;
    assert_msg!(response, StatusCode::BAD_REQUEST, "post already liked");

    let response = app.put(&format!("/api/posts/{id}/like"), author.token(), None).await;
    assert_eq!(
        response.body,
        json!([{"user": author.id.to_string()}, {"user": fan.id.to_string()}])
    );

    // unlike removes the caller's entry, not the first one
    let response = app.put(&format!("/api/posts/{id}/unlike"), fan.token(), None).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, json!([{"user": author.id.to_string()}]));

    let response = app.put(&format!("/api/posts/{}/like", Uuid::new_v4()), fan.token(), None).await;
    assert_msg!(response, StatusCode::NOT_FOUND, "no post exists");
}

#[tokio::test]
async fn test_comments() {
    let app = TestApp::new();
    let author = register_unique_user(&app, "Alice").await;
    let commenter = register_unique_user(&app, "Bob").await;
    let post = create_post(&app, &author, "discuss").await;
    let uri = format!("/api/posts/{}/comment", post["id"].as_str().unwrap());

    let response = app.post(&uri, commenter.token(), json!({"text": "  "})).await;
    assert_field_errors!(response, ["text"]);

    let response = app.post(&uri, commenter.token(), json!({"text": "first!"})).await;
    assert_status!(response, StatusCode::OK);
    let response = app.post(&uri, author.token(), json!({"text": "thanks"})).await;
    let comments = response.body.as_array().unwrap().clone();
    assert_eq!(comments[0]["text"], "thanks");
    assert_eq!(comments[1]["name"], "Bob");

    let bob_comment = comments[1]["id"].as_str().unwrap();
    let response = app.delete(&format!("{uri}/{bob_comment}"), author.token()).await;
    assert_msg!(response, StatusCode::FORBIDDEN, "user not authorized");

    let response = app.delete(&format!("{uri}/{}", Uuid::new_v4()), commenter.token()).await;
    assert_msg!(response, StatusCode::NOT_FOUND, "that comment does not exist");

    let response = app.delete(&format!("{uri}/{bob_comment}"), commenter.token()).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 1);
    assert_eq!(response.body[0]["text"], "thanks");
}
