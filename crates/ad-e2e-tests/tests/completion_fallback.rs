//! E2E tests for the completion fallback against a mock OpenAI-compatible
//! endpoint, using the real HTTP client.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ad_assistant::{CompletionClient, CompletionConfig, ServiceError};
use helpers::TestHarness;

fn config_for(server: &MockServer) -> CompletionConfig {
    CompletionConfig {
        base_url: format!("{}/api/v1", server.uri()),
        api_key: Some("sk-e2e".into()),
        timeout_secs: 2.0,
        ..CompletionConfig::default()
    }
}

fn harness_for(config: CompletionConfig) -> TestHarness {
    let client = CompletionClient::new(config).unwrap();
    TestHarness::with_backend(Arc::new(client))
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "gen-e2e",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// Unmatched messages go to the endpoint with the catalog context attached.
#[tokio::test]
async fn e2e_fallback_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-e2e"))
        .and(body_partial_json(json!({"model": "openai/gpt-4o-mini"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("  نعم، نوفر التوصيل خلال 72 ساعة.  ")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let h = harness_for(config_for(&server));
    let (status, reply) = h.chat("alice", "Do you deliver to Jeddah?").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["response"], "نعم، نوفر التوصيل خلال 72 ساعة.");
    assert_eq!(reply["sources"], json!([]));

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = sent["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["role"], "system");
    assert!(messages[1]["content"].as_str().unwrap().contains("enter a car number"));
    assert!(messages[1]["content"].as_str().unwrap().contains("Toyota Camry (USD 32,500)"));
    assert_eq!(messages[2]["content"], "Do you deliver to Jeddah?");
}

/// Deterministic answers never reach the endpoint.
#[tokio::test]
async fn e2e_local_answers_skip_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness_for(config_for(&server));
    let (status, _) = h.chat("alice", "show cars").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = h.chat("alice", "4").await;
    assert_eq!(status, StatusCode::OK);
}

/// A model reply that asks for a car number sets up the next pick.
#[tokio::test]
async fn e2e_model_prompt_enables_bare_one() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("Happy to help! Please enter a car number.")),
        )
        .mount(&server)
        .await;

    let h = harness_for(config_for(&server));
    h.chat("alice", "which one suits a family?").await;
    let (_, reply) = h.chat("alice", "1").await;
    assert!(reply["response"].as_str().unwrap().starts_with("BMW X5"));
}

/// Each failure class maps to 502 with its safe message, and nothing is stored.
#[tokio::test]
async fn e2e_endpoint_failures_are_bad_gateway() {
    let cases: Vec<(ResponseTemplate, ServiceError)> = vec![
        (ResponseTemplate::new(503), ServiceError::Unavailable),
        (
            ResponseTemplate::new(200).set_body_string("<html>gateway</html>"),
            ServiceError::UnreadableResponse,
        ),
        (
            ResponseTemplate::new(200).set_body_json(json!({"choices": []})),
            ServiceError::UnexpectedStructure,
        ),
        (
            ResponseTemplate::new(200).set_body_json(completion_body("   ")),
            ServiceError::EmptyResponse,
        ),
    ];

    for (template, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(template)
            .mount(&server)
            .await;

        let h = harness_for(config_for(&server));
        let (status, body) = h.chat("alice", "what is your return policy?").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY, "{expected:?}");
        assert_eq!(body["error"], expected.to_string());
        assert_eq!(body["status"], 502);

        let (_, history) = h.history("alice").await;
        assert!(history.as_array().unwrap().is_empty(), "{expected:?}");
    }
}

/// A slow endpoint times out as unreachable.
#[tokio::test]
async fn e2e_endpoint_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("too late"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let h = harness_for(CompletionConfig {
        timeout_secs: 0.5,
        ..config_for(&server)
    });
    let (status, body) = h.chat("alice", "tell me a story").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], ServiceError::Unreachable.to_string());
}

/// Missing API key fails before any request is sent.
#[tokio::test]
async fn e2e_missing_key_is_configuration_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness_for(CompletionConfig {
        api_key: None,
        ..config_for(&server)
    });
    let (status, body) = h.chat("alice", "hello there").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], ServiceError::Configuration.to_string());
}
