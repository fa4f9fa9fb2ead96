//! Dialogue resolver: local rules first, completion fallback.
//!
//! Each call is independent. The resolver reads a fresh catalog snapshot,
//! tries the deterministic matcher, and only sends the message to the
//! completion backend when no rule applies. The reply's `tier` records which
//! path produced it.

use std::sync::Arc;

use ad_protocol::chat::{BotReply, PromptKind};

use crate::catalog::CatalogSource;
use crate::completion::CompletionBackend;
use crate::error::{ChatError, ChatResult};
use crate::matcher::{MatcherMode, clean_message, match_intent};
use crate::prompt::{DEFAULT_SYSTEM_PROMPT, build_messages};
use crate::render::{render, sniff_prompt_kind};

const EMPTY_MESSAGE: &str =
    "I didn't catch that. Please enter a question about our cars or services.";

/// Resolves one user message into a bot reply.
pub struct DialogueResolver {
    catalog: Arc<dyn CatalogSource>,
    completion: Arc<dyn CompletionBackend>,
    mode: MatcherMode,
    system_prompt: String,
}

impl DialogueResolver {
    pub fn new(catalog: Arc<dyn CatalogSource>, completion: Arc<dyn CompletionBackend>) -> Self {
        Self {
            catalog,
            completion,
            mode: MatcherMode::default(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn with_mode(mut self, mode: MatcherMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn mode(&self) -> MatcherMode {
        self.mode
    }

    /// Resolve `message` given the raw text of the previous bot reply.
    pub async fn resolve(&self, message: &str, previous: Option<&str>) -> ChatResult<BotReply> {
        let prior = previous.map(sniff_prompt_kind).unwrap_or_default();
        self.resolve_with_prior(message, prior).await
    }

    /// Resolve `message` given the stored kind of the previous bot reply.
    pub async fn resolve_with_prior(
        &self,
        message: &str,
        prior: PromptKind,
    ) -> ChatResult<BotReply> {
        let cleaned = clean_message(message);
        if cleaned.is_empty() {
            return Err(ChatError::Validation(EMPTY_MESSAGE.to_string()));
        }

        let catalog = self.catalog.list_all().await?;

        if let Some(intent) = match_intent(self.mode, &cleaned, prior, &catalog) {
            tracing::debug!(?intent, mode = ?self.mode, "answered locally");
            return Ok(render(&intent, &catalog));
        }

        tracing::debug!(
            backend = self.completion.backend_name(),
            "no local rule matched, falling back to completion"
        );
        let messages = build_messages(&self.system_prompt, self.mode, &catalog, message.trim());
        let text = self.completion.complete(&messages).await?;
        let kind = sniff_prompt_kind(&text);
        Ok(BotReply::completion(text).with_prompt_kind(kind))
    }
}
