//! Custom assertion macros
//!
//! Shorthand for checking a `TestResponse` status and message body. Each
//! macro evaluates its response expression once.

/// Assert a response status, printing the body on mismatch
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status,
            $status,
            "unexpected status, body: {}",
            response.body
        );
    }};
}

/// Assert a response carries `{"msg": <text>}` with the given status
#[macro_export]
macro_rules! assert_msg {
    ($response:expr, $status:expr, $msg:expr) => {{
        let response = &$response;
        $crate::assert_status!(*response, $status);
        assert_eq!(response.body, serde_json::json!({ "msg": $msg }));
    }};
}

/// Assert a 400 whose field errors name exactly the given params, in order
#[macro_export]
macro_rules! assert_field_errors {
    ($response:expr, [$($param:expr),* $(,)?]) => {{
        let response = &$response;
        $crate::assert_status!(*response, axum::http::StatusCode::BAD_REQUEST);
        let params: Vec<&str> = response.body["errors"]
            .as_array()
            .expect("errors array")
            .iter()
            .map(|e| e["param"].as_str().expect("param"))
            .collect();
        let expected: Vec<&str> = vec![$($param),*];
        assert_eq!(params, expected);
    }};
}
