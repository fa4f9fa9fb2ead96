//! Scripted completion backend for testing without a network.
//!
//! Returns the same outcome on every call and records what it was sent.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::completion::{ChatMessage, CompletionBackend};
use crate::error::ServiceError;

/// Mock implementation of [`CompletionBackend`].
pub struct MockCompletion {
    outcome: Result<String, ServiceError>,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<ChatMessage>>,
}

impl MockCompletion {
    /// Always reply with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_outcome(Ok(text.into()))
    }

    /// Always fail with `error`.
    pub fn failing(error: ServiceError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<String, ServiceError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
        }
    }

    /// Number of `complete` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Messages passed to the most recent call (empty before the first).
    pub fn last_messages(&self) -> Vec<ChatMessage> {
        self.last_messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::replying("This is a mock reply.")
    }
}

#[async_trait]
impl CompletionBackend for MockCompletion {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        {
            let mut last = self
                .last_messages
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *last = messages.to_vec();
        }
        self.outcome.clone()
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}
