//! Shared test harness for E2E integration tests.
//!
//! Drives the full HTTP surface through `tower::oneshot`, optionally with a
//! wiremock chat-completions endpoint standing in for the external model.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use vault_api::routes::build_router;
use vault_api::state::AppState;
use vault_intent::ModelConfig;

/// End-to-end test harness around the API router.
pub struct TestHarness {
    pub router: Router,
}

impl TestHarness {
    /// Harness with no model endpoint: pattern matching only.
    pub fn pattern_only() -> Self {
        Self {
            router: build_router(AppState::new()),
        }
    }

    /// Harness whose resolver calls the given mock chat-completions server.
    pub fn with_model_endpoint(server_uri: &str) -> Self {
        let config = ModelConfig {
            api_url: format!("{server_uri}/v1/chat/completions"),
            api_key: "test-key".into(),
            model: "gpt-4o-mini".into(),
            timeout_secs: 2,
        };
        Self {
            router: build_router(AppState::with_model(config)),
        }
    }

    /// POST /api/v1/assets/find. Returns (HTTP status, response JSON).
    pub async fn find(&self, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post("/api/v1/assets/find")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    /// Shorthand: find with a bare request string and no context.
    pub async fn find_text(&self, text: &str) -> (StatusCode, serde_json::Value) {
        self.find(serde_json::json!({ "request": text })).await
    }
}

/// Build a chat-completions response body whose content is the given string.
pub fn chat_response(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-e2e",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}
