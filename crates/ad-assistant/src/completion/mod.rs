//! Remote text completion for messages the local rules can't answer.
//!
//! [`CompletionBackend`] is the seam the resolver talks to;
//! [`CompletionClient`] is the HTTP implementation for OpenAI-compatible
//! chat-completions endpoints (OpenRouter by default).

pub mod client;
pub mod config;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

pub use client::CompletionClient;
pub use config::CompletionConfig;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Something that turns a message list into reply text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send the messages and return the trimmed, non-empty reply text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ServiceError>;

    /// Name of this backend (for logging).
    fn backend_name(&self) -> &str;
}

/// Backend used until a real client is wired in; every call fails with
/// [`ServiceError::Configuration`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredBackend;

#[async_trait]
impl CompletionBackend for UnconfiguredBackend {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, ServiceError> {
        tracing::warn!("no completion backend configured");
        Err(ServiceError::Configuration)
    }

    fn backend_name(&self) -> &str {
        "unconfigured"
    }
}
