//! Text-analysis provider configuration.

use std::env;
use std::time::Duration;

use common::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// OpenAI-compatible provider configuration.
#[derive(Clone)]
pub struct OpenAiConfig {
    /// Bearer key. Summarize requests fail while it is unset.
    pub api_key: Option<String>,
    /// Full chat completions URL
    pub api_url: String,
    pub model: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OpenAiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENAI_KEY").ok().filter(|key| !key.is_empty());
        if api_key.is_none() {
            tracing::warn!("OPENAI_KEY not set, summarize requests will fail");
        }

        let timeout_seconds = match env::var("OPENAI_TIMEOUT_SECONDS") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "OPENAI_TIMEOUT_SECONDS",
                reason: format!("'{}' is not a whole number of seconds", value),
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECONDS,
        };

        Ok(Self {
            api_key,
            api_url: env::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            timeout: Duration::from_secs(timeout_seconds),
        })
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OpenAiConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = OpenAiConfig {
            api_key: Some("sk-very-secret".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("sk-very-secret"));
    }
}
