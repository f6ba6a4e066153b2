//! Property-based tests for likes through the HTTP API
//!
//! Any sequence of like and unlike requests leaves at most one like per
//! user, and each response matches a simple set model.

use axum::http::StatusCode;
use proptest::prelude::*;
use std::collections::HashSet;

use crate::common::{register_unique_user, TestApp};

fn run(ops: Vec<(usize, bool)>) -> Result<(), TestCaseError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime");

    runtime.block_on(async move {
        let app = TestApp::new();
        let mut users = Vec::new();
        for name in ["Ann", "Ben", "Cat"] {
            users.push(register_unique_user(&app, name).await);
        }
        let post = app
            .post("/api/posts", users[0].token(), serde_json::json!({"text": "p"}))
            .await;
        let id = post.body["id"].as_str().expect("post id").to_string();

        let mut liked = HashSet::new();
        for (who, like) in ops {
            let user = &users[who];
            let action = if like { "like" } else { "unlike" };
            let response = app
                .put(&format!("/api/posts/{id}/{action}"), user.token(), None)
                .await;

            let changed = if like { liked.insert(user.id) } else { liked.remove(&user.id) };
            let expected = if changed { StatusCode::OK } else { StatusCode::BAD_REQUEST };
            prop_assert_eq!(response.status, expected);
        }

        let stored = app.get(&format!("/api/posts/{id}"), users[0].token()).await;
        let likes: Vec<String> = stored.body["likes"]
            .as_array()
            .expect("likes")
            .iter()
            .map(|l| l["user"].as_str().expect("user").to_string())
            .collect();
        let unique: HashSet<&String> = likes.iter().collect();
        prop_assert_eq!(unique.len(), likes.len());
        prop_assert_eq!(likes.len(), liked.len());
        Ok(())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_at_most_one_like_per_user(ops in proptest::collection::vec((0usize..3, any::<bool>()), 0..20)) {
        run(ops)?;
    }
}
