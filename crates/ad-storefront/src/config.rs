//! Storefront server configuration, loadable from TOML or environment.

use std::path::Path;

use ad_assistant::{CompletionConfig, MatcherMode};
use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming a TOML config file.
pub const CONFIG_PATH_VAR: &str = "AUTODRIVE_CONFIG";

/// Top-level storefront configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// PostgreSQL connection URL. None runs on in-memory sample data.
    #[serde(default)]
    pub database_url: Option<String>,
    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// Chat assistant settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssistantConfig {
    /// Which deterministic rule set answers before the completion fallback.
    #[serde(default)]
    pub mode: MatcherMode,
    #[serde(default)]
    pub completion: CompletionConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
            cors_origins: vec![],
            assistant: AssistantConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load from the file named by `AUTODRIVE_CONFIG`, or from the
    /// environment when it is unset.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(&path),
            Err(_) => Ok(Self::from_env()),
        }
    }

    /// Load config from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Load config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or invalid values keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mode = match lookup("ASSISTANT_MODE") {
            Some(name) => MatcherMode::from_name(&name).unwrap_or_else(|| {
                tracing::warn!(mode = %name, "unknown ASSISTANT_MODE, using default");
                MatcherMode::default()
            }),
            None => MatcherMode::default(),
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|list| {
                    list.split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            assistant: AssistantConfig {
                mode,
                completion: CompletionConfig::from_lookup(&lookup),
            },
        }
    }

    /// `host:port` to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
