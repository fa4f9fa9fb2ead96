//! Completion endpoint configuration, loadable from TOML or environment.

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::prompt::DEFAULT_SYSTEM_PROMPT;

/// Settings for the remote chat-completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    /// API base URL; `/chat/completions` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer credential. Requests fail with a configuration error without it.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,
    /// Sent as `HTTP-Referer` when set and not blank.
    #[serde(default = "default_site_url")]
    pub site_url: Option<String>,
    /// Sent as `X-Title` when set and not blank.
    #[serde(default = "default_app_name")]
    pub app_name: Option<String>,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".into()
}
fn default_model() -> String {
    "openai/gpt-4o-mini".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    512
}
fn default_timeout_secs() -> f64 {
    20.0
}
fn default_site_url() -> Option<String> {
    Some("https://autodrive-market.local".into())
}
fn default_app_name() -> Option<String> {
    Some("AutoDrive Chatbot".into())
}
fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.into()
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            site_url: default_site_url(),
            app_name: default_app_name(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl CompletionConfig {
    /// Load configuration from `OPENROUTER_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or unparsable values keep
    /// their defaults; empty strings clear the optional headers.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let optional = |key: &str, default: Option<String>| match lookup(key) {
            Some(v) if v.trim().is_empty() => None,
            Some(v) => Some(v),
            None => default,
        };

        Self {
            base_url: lookup("OPENROUTER_BASE_URL").unwrap_or(defaults.base_url),
            api_key: lookup("OPENROUTER_API_KEY"),
            model: lookup("OPENROUTER_MODEL").unwrap_or(defaults.model),
            temperature: parse_var(&lookup, "OPENROUTER_TEMPERATURE").unwrap_or(defaults.temperature),
            max_tokens: parse_var(&lookup, "OPENROUTER_MAX_TOKENS").unwrap_or(defaults.max_tokens),
            timeout_secs: parse_var(&lookup, "OPENROUTER_TIMEOUT").unwrap_or(defaults.timeout_secs),
            site_url: optional("OPENROUTER_SITE_URL", defaults.site_url),
            app_name: optional("OPENROUTER_APP_NAME", defaults.app_name),
            system_prompt: lookup("OPENROUTER_SYSTEM_PROMPT").unwrap_or(defaults.system_prompt),
        }
    }

    /// The API key, if present and not blank.
    pub fn credential(&self) -> Option<&str> {
        non_blank(self.api_key.as_deref())
    }

    /// `HTTP-Referer` header value; blank counts as unset.
    pub fn referer(&self) -> Option<&str> {
        non_blank(self.site_url.as_deref())
    }

    /// `X-Title` header value; blank counts as unset.
    pub fn title(&self) -> Option<&str> {
        non_blank(self.app_name.as_deref())
    }

    /// Request timeout. Non-positive or non-finite values fall back to the
    /// default.
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs > 0.0 {
            Duration::try_from_secs_f64(self.timeout_secs)
                .unwrap_or_else(|_| Duration::from_secs_f64(default_timeout_secs()))
        } else {
            Duration::from_secs_f64(default_timeout_secs())
        }
    }

    /// Full URL of the chat-completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}
