//! Assistant error types.
//!
//! `Display` output of [`ServiceError`] is safe to show to end users. Status
//! codes, raw bodies and transport errors are logged where they occur and
//! never carried in these values.

use thiserror::Error;

/// Failure of the remote completion service, narrowed to a safe category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Missing or blank API credential; no request was sent.
    #[error("The assistant is not configured yet. Please try again later.")]
    Configuration,

    /// Response body was not JSON.
    #[error("The assistant returned an unreadable response. Please try again.")]
    UnreadableResponse,

    /// Endpoint answered with a non-2xx status.
    #[error("The assistant service is currently unavailable. Please try again shortly.")]
    Unavailable,

    /// Connection failure or timeout.
    #[error("Unable to reach the assistant service. Please try again shortly.")]
    Unreachable,

    /// JSON without `choices[0].message.content`.
    #[error("The assistant returned an unexpected response. Please try again.")]
    UnexpectedStructure,

    /// Reply text was empty after trimming.
    #[error("The assistant returned an empty response. Please rephrase your question.")]
    EmptyResponse,
}

impl ServiceError {
    /// Stable machine-readable category name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::UnreadableResponse => "unreadable_response",
            Self::Unavailable => "service_unavailable",
            Self::Unreachable => "unreachable",
            Self::UnexpectedStructure => "unexpected_structure",
            Self::EmptyResponse => "empty_response",
        }
    }
}

/// Catalog storage could not be read.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog storage error: {0}")]
    Storage(String),
}

/// Everything a resolution can fail with.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The user's input was rejected before any work was done.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ChatError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Convenience alias for resolver results.
pub type ChatResult<T> = Result<T, ChatError>;
