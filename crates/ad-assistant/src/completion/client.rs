//! HTTP client for OpenAI-compatible chat-completions endpoints.
//!
//! One POST per call, bounded by the configured timeout, no retries. Every
//! failure is logged with its detail and narrowed to a [`ServiceError`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{ChatMessage, CompletionBackend, CompletionConfig};
use crate::error::ServiceError;

/// Chat-completions request body.
#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

/// Chat-completions response (only fields we need).
#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for the remote completion endpoint.
pub struct CompletionClient {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                tracing::error!(error = %e, "failed to build completion HTTP client");
                ServiceError::Configuration
            })?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ServiceError> {
        let Some(api_key) = self.config.credential() else {
            tracing::warn!("completion API key is not configured");
            return Err(ServiceError::Configuration);
        };

        let url = self.config.endpoint();
        let body = CompletionRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let mut request = self.client.post(&url).bearer_auth(api_key).json(&body);
        if let Some(referer) = self.config.referer() {
            request = request.header("HTTP-Referer", referer);
        }
        if let Some(title) = self.config.title() {
            request = request.header("X-Title", title);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(
                error = %e,
                timed_out = e.is_timeout(),
                url = %url,
                "completion request failed"
            );
            ServiceError::Unreachable
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %detail, "completion endpoint returned error status");
            return Err(ServiceError::Unavailable);
        }

        let raw = response.text().await.map_err(|e| {
            tracing::warn!(error = %e, "failed to read completion response body");
            ServiceError::Unreachable
        })?;

        parse_reply(&raw)
    }

    fn backend_name(&self) -> &str {
        "openrouter"
    }
}

/// Extract `choices[0].message.content` from a response body.
fn parse_reply(raw: &str) -> Result<String, ServiceError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        tracing::warn!(error = %e, body = %raw, "completion response is not JSON");
        ServiceError::UnreadableResponse
    })?;

    let parsed: CompletionResponse = serde_json::from_value(value).map_err(|e| {
        tracing::warn!(error = %e, body = %raw, "completion response has unexpected shape");
        ServiceError::UnexpectedStructure
    })?;

    let Some(content) = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
    else {
        tracing::warn!(body = %raw, "completion response missing choices[0].message.content");
        return Err(ServiceError::UnexpectedStructure);
    };

    let reply = content.trim();
    if reply.is_empty() {
        tracing::warn!("completion reply is empty");
        return Err(ServiceError::EmptyResponse);
    }
    Ok(reply.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Helper: build a chat-completions response body.
    fn completion_response(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "gen-123",
            "model": "openai/gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })
    }

    fn config_for(server: &MockServer) -> CompletionConfig {
        CompletionConfig {
            base_url: format!("{}/api/v1", server.uri()),
            api_key: Some("sk-test".into()),
            timeout_secs: 2.0,
            ..CompletionConfig::default()
        }
    }

    fn client_for(server: &MockServer) -> CompletionClient {
        CompletionClient::new(config_for(server)).unwrap()
    }

    fn messages() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("You are a car sales assistant."),
            ChatMessage::user("Do you deliver to Jeddah?"),
        ]
    }

    // ── parse_reply ──────────────────────────────────────────────

    #[test]
    fn parse_reply_trims_content() {
        let raw = completion_response("  Yes, within 72 hours.\n").to_string();
        assert_eq!(parse_reply(&raw).unwrap(), "Yes, within 72 hours.");
    }

    #[test]
    fn parse_reply_not_json() {
        assert_eq!(
            parse_reply("<html>Bad Gateway</html>"),
            Err(ServiceError::UnreadableResponse)
        );
    }

    #[test]
    fn parse_reply_missing_fields() {
        for raw in [
            r#"{}"#,
            r#"{"choices": []}"#,
            r#"{"choices": [{"message": {"role": "assistant"}}]}"#,
            r#"{"choices": "nope"}"#,
            r#"[1, 2, 3]"#,
        ] {
            assert_eq!(
                parse_reply(raw),
                Err(ServiceError::UnexpectedStructure),
                "{raw}"
            );
        }
    }

    #[test]
    fn parse_reply_blank_content() {
        let raw = completion_response(" \n\t ").to_string();
        assert_eq!(parse_reply(&raw), Err(ServiceError::EmptyResponse));
    }

    // ── HTTP round trips ─────────────────────────────────────────

    #[tokio::test]
    async fn complete_success_sends_expected_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(header("HTTP-Referer", "https://autodrive-market.local"))
            .and(header("X-Title", "AutoDrive Chatbot"))
            .and(body_partial_json(serde_json::json!({
                "model": "openai/gpt-4o-mini",
                "max_tokens": 512,
                "messages": [
                    {"role": "system", "content": "You are a car sales assistant."},
                    {"role": "user", "content": "Do you deliver to Jeddah?"}
                ]
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_response("Yes, nationwide within 72 hours.")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server).complete(&messages()).await.unwrap();
        assert_eq!(reply, "Yes, nationwide within 72 hours.");
    }

    #[tokio::test]
    async fn optional_headers_omitted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_response("ok")))
            .mount(&server)
            .await;

        let unset = CompletionConfig {
            site_url: None,
            app_name: None,
            ..config_for(&server)
        };
        let blank = CompletionConfig {
            site_url: Some(String::new()),
            app_name: Some("   ".into()),
            ..config_for(&server)
        };
        for config in [unset, blank] {
            let client = CompletionClient::new(config).unwrap();
            assert_eq!(client.complete(&messages()).await.unwrap(), "ok");
        }

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
        for request in &requests {
            assert!(request.headers.get("x-title").is_none());
            assert!(request.headers.get("http-referer").is_none());
        }
    }

    #[tokio::test]
    async fn missing_key_never_hits_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_response("ok")))
            .expect(0)
            .mount(&server)
            .await;

        for api_key in [None, Some(String::new()), Some("  ".into())] {
            let client = CompletionClient::new(CompletionConfig {
                api_key,
                ..config_for(&server)
            })
            .unwrap();
            assert_eq!(
                client.complete(&messages()).await,
                Err(ServiceError::Configuration)
            );
        }
    }

    #[tokio::test]
    async fn error_status_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(429)
                    .set_body_json(serde_json::json!({"error": {"message": "rate limited"}})),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).complete(&messages()).await;
        assert_eq!(result, Err(ServiceError::Unavailable));
    }

    #[tokio::test]
    async fn html_body_is_unreadable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server).complete(&messages()).await;
        assert_eq!(result, Err(ServiceError::UnreadableResponse));
    }

    #[tokio::test]
    async fn missing_choices_is_unexpected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "gen-1"})),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).complete(&messages()).await;
        assert_eq!(result, Err(ServiceError::UnexpectedStructure));
    }

    #[tokio::test]
    async fn blank_reply_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_response("   ")))
            .mount(&server)
            .await;

        let result = client_for(&server).complete(&messages()).await;
        assert_eq!(result, Err(ServiceError::EmptyResponse));
    }

    #[tokio::test]
    async fn timeout_is_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_response("late"))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        // Client timeout is 0.5s, mock delays 5s
        let client = CompletionClient::new(CompletionConfig {
            timeout_secs: 0.5,
            ..config_for(&server)
        })
        .unwrap();
        let result = client.complete(&messages()).await;
        assert_eq!(result, Err(ServiceError::Unreachable));
    }

    #[tokio::test]
    async fn connection_refused_is_unreachable() {
        let server = MockServer::start().await;
        let config = config_for(&server);
        drop(server);

        let client = CompletionClient::new(config).unwrap();
        let result = client.complete(&messages()).await;
        assert_eq!(result, Err(ServiceError::Unreachable));
    }
}
