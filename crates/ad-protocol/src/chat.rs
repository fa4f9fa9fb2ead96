use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a bot reply asked the user for, so the next numeric answer can be
/// interpreted against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    /// The numbered inventory list; a number picks a car from it.
    InventoryList,
    /// An "enter a car number" prompt.
    DetailPrompt,
    /// Anything else.
    #[default]
    Other,
}

impl PromptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InventoryList => "inventory_list",
            Self::DetailPrompt => "detail_prompt",
            Self::Other => "other",
        }
    }

    /// Parse the stored string form. Unknown values map to `Other`.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "inventory_list" => Self::InventoryList,
            "detail_prompt" => Self::DetailPrompt,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which tier produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyTier {
    /// Deterministic answer from the local catalog and keyword rules.
    Local,
    /// Free-form answer from the remote completion endpoint.
    Completion,
}

/// A reply produced by the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    /// Text shown to the user.
    pub message: String,
    /// Catalog slugs the reply refers to, in order. Only set on local replies.
    #[serde(default)]
    pub sources: Vec<String>,
    /// What the reply asks the user for.
    #[serde(default)]
    pub prompt_kind: PromptKind,
    pub tier: ReplyTier,
}

impl BotReply {
    /// A deterministic reply with no catalog references.
    pub fn local(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sources: Vec::new(),
            prompt_kind: PromptKind::Other,
            tier: ReplyTier::Local,
        }
    }

    /// A reply from the completion endpoint.
    pub fn completion(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sources: Vec::new(),
            prompt_kind: PromptKind::Other,
            tier: ReplyTier::Completion,
        }
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_prompt_kind(mut self, kind: PromptKind) -> Self {
        self.prompt_kind = kind;
        self
    }
}

/// One persisted (message, response) exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// UUIDv7, time-sortable.
    pub id: Uuid,
    /// Identity of the user who sent the message.
    pub user_id: String,
    pub message: String,
    pub response: String,
    /// Prompt kind of `response`, used to interpret the user's next message.
    #[serde(default)]
    pub prompt_kind: PromptKind,
    pub created_at: DateTime<Utc>,
}

impl ConversationTurn {
    /// Pair a user message with the reply it produced.
    pub fn new(user_id: impl Into<String>, message: impl Into<String>, reply: &BotReply) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id: user_id.into(),
            message: message.into(),
            response: reply.message.clone(),
            prompt_kind: reply.prompt_kind,
            created_at: Utc::now(),
        }
    }
}
