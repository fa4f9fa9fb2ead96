//! AutoDrive chat assistant.
//!
//! Resolves one user message at a time against the car catalog:
//! - **Local tier**: keyword and digit rules answered straight from the
//!   catalog (inventory list, car details, greetings, FAQ topics).
//! - **Completion tier**: an OpenAI-compatible chat-completions endpoint for
//!   everything the rules don't cover.
//!
//! The only context carried between messages is the previous bot reply.

pub mod catalog;
pub mod completion;
pub mod digits;
pub mod error;
pub mod matcher;
pub mod mock;
pub mod prompt;
pub mod render;
pub mod resolver;

pub use catalog::{CatalogSource, StaticCatalog};
pub use completion::{
    ChatMessage, CompletionBackend, CompletionClient, CompletionConfig, Role, UnconfiguredBackend,
};
pub use error::{CatalogError, ChatError, ServiceError};
pub use matcher::{Intent, MatcherMode};
pub use mock::MockCompletion;
pub use render::sniff_prompt_kind;
pub use resolver::DialogueResolver;
