use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:1234/v1/completions";
pub const DEFAULT_MODEL_NAME: &str = "your-model-name";
pub const DEFAULT_MAX_HISTORY_MESSAGES: usize = 5;
pub const DEFAULT_RATE_LIMIT_SECONDS: f64 = 1.0;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 512;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant. \
You provide clear, accurate, and concise responses while being friendly and professional.";

/// Immutable per-process configuration for the request pipeline.
///
/// Built once at startup (environment-backed CLI flags) and passed by
/// reference into the pipeline; request handling never reads ambient state.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Completion endpoint, e.g. `http://127.0.0.1:1234/v1/completions`.
    pub api_url: String,
    /// Model name forwarded in every request payload.
    pub model: String,
    /// How many prior transcript messages each request may carry.
    /// Zero means only the new message is sent.
    pub max_history_messages: usize,
    /// Minimum wall-clock gap between consecutive requests.
    pub rate_limit: Duration,
    /// Sent ahead of the history as the `System:` line. Empty disables it.
    pub system_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL_NAME.to_string(),
            max_history_messages: DEFAULT_MAX_HISTORY_MESSAGES,
            rate_limit: Duration::from_secs_f64(DEFAULT_RATE_LIMIT_SECONDS),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API URL {0:?}: expected an absolute http(s) URL with a host")]
    InvalidApiUrl(String),
    #[error("rate limit must be a finite, non-negative number of seconds")]
    InvalidRateLimit,
}

impl ChatConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !validate_api_url(&self.api_url) {
            return Err(ConfigError::InvalidApiUrl(self.api_url.clone()));
        }
        Ok(())
    }

    /// Parse a `RATE_LIMIT_SECONDS`-style value into a duration, rejecting
    /// negative, NaN and infinite inputs.
    pub fn rate_limit_from_secs(seconds: f64) -> Result<Duration, ConfigError> {
        Duration::try_from_secs_f64(seconds).map_err(|_| ConfigError::InvalidRateLimit)
    }
}

/// Accepts absolute http(s) URLs that carry a host.
pub fn validate_api_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ChatConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_api_url_accepts_local_endpoints() {
        for url in [
            "http://127.0.0.1:1234/v1/completions",
            "http://localhost:11434/api/generate",
            "https://models.internal/v1/completions",
        ] {
            assert!(validate_api_url(url), "url {url:?} should be valid");
        }
    }

    #[test]
    fn validate_api_url_rejects_junk() {
        for url in ["", "not a url", "localhost:1234", "file:///etc/passwd"] {
            assert!(!validate_api_url(url), "url {url:?} should be invalid");
        }
    }

    #[test]
    fn invalid_url_fails_validation() {
        let config = ChatConfig {
            api_url: "definitely-not-a-url".to_string(),
            ..ChatConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidApiUrl(_))
        ));
    }

    #[test]
    fn rate_limit_parsing() {
        assert_eq!(
            ChatConfig::rate_limit_from_secs(1.5).unwrap(),
            Duration::from_millis(1500)
        );
        assert_eq!(
            ChatConfig::rate_limit_from_secs(0.0).unwrap(),
            Duration::ZERO
        );
        assert!(ChatConfig::rate_limit_from_secs(-1.0).is_err());
        assert!(ChatConfig::rate_limit_from_secs(f64::NAN).is_err());
    }
}
