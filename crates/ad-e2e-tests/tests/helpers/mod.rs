//! Shared test harness for E2E integration tests.
//!
//! Wires the storefront router to in-memory state and a chosen completion
//! backend, and wraps the HTTP calls the tests make.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ad_assistant::{CompletionBackend, MatcherMode, MockCompletion};
use ad_storefront::routes::build_router;
use ad_storefront::routes::chat::USER_HEADER;
use ad_storefront::state::AppState;

/// Reply scripted into the default mock backend.
pub const MOCK_REPLY: &str = "Our showroom is open from 9am to 9pm, Saturday to Thursday.";

/// End-to-end test harness around the storefront router.
pub struct TestHarness {
    /// Storefront state (in-memory, no DB).
    pub state: AppState,
    /// Axum router for HTTP requests via `tower::oneshot`.
    pub router: Router,
    /// The scripted backend, when the harness was built with one.
    pub mock: Option<Arc<MockCompletion>>,
}

impl TestHarness {
    /// Sample inventory (4 cars) and a mock backend replying [`MOCK_REPLY`].
    pub fn with_sample_data() -> Self {
        Self::with_mock(AppState::with_sample_data(), MockCompletion::replying(MOCK_REPLY))
    }

    /// Sample inventory and a mock backend that always fails.
    pub fn failing(error: ad_assistant::ServiceError) -> Self {
        Self::with_mock(AppState::with_sample_data(), MockCompletion::failing(error))
    }

    /// No cars at all.
    pub fn empty() -> Self {
        Self::with_mock(AppState::new(), MockCompletion::replying(MOCK_REPLY))
    }

    /// Sample inventory and an arbitrary completion backend.
    pub fn with_backend(backend: Arc<dyn CompletionBackend>) -> Self {
        let state = AppState::with_sample_data().with_completion(backend);
        let router = build_router(state.clone());
        Self {
            state,
            router,
            mock: None,
        }
    }

    fn with_mock(state: AppState, mock: MockCompletion) -> Self {
        let mock = Arc::new(mock);
        let state = state.with_completion(mock.clone());
        let router = build_router(state.clone());
        Self {
            state,
            router,
            mock: Some(mock),
        }
    }

    /// Switch the assistant mode (rebuilds the router).
    pub fn with_mode(self, mode: MatcherMode) -> Self {
        let state = self.state.with_mode(mode);
        let router = build_router(state.clone());
        Self {
            state,
            router,
            mock: self.mock,
        }
    }

    /// Number of completion calls made through the mock backend.
    pub fn completion_calls(&self) -> usize {
        self.mock.as_ref().map_or(0, |m| m.call_count())
    }

    /// Send a chat message as `user` (POST /api/v1/chat).
    /// Returns (HTTP status code, response JSON body).
    pub async fn chat(&self, user: &str, message: &str) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({ "message": message });
        self.post_json("/api/v1/chat", Some(user), &body).await
    }

    /// Send a chat message with an explicit previous bot reply.
    pub async fn chat_after(
        &self,
        user: &str,
        message: &str,
        previous: &str,
    ) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({
            "message": message,
            "previous_response": previous,
        });
        self.post_json("/api/v1/chat", Some(user), &body).await
    }

    /// Fetch a user's history (GET /api/v1/chat/history).
    pub async fn history(&self, user: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::get("/api/v1/chat/history")
            .header(USER_HEADER, user)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Submit the contact form (POST /api/v1/contact).
    pub async fn contact(&self, body: &serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.post_json("/api/v1/contact", None, body).await
    }

    /// Plain GET.
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    /// POST a JSON body, optionally as a signed-in user.
    pub async fn post_json(
        &self,
        uri: &str,
        user: Option<&str>,
        body: &serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::post(uri).header("content-type", "application/json");
        if let Some(user) = user {
            builder = builder.header(USER_HEADER, user);
        }
        let request = builder
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}
