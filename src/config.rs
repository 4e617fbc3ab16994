use std::{env, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: Option<String>,
    pub chat_model: String,
    pub chat_timeout_seconds: u64,
    pub cors_allowed_origin: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_payload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE")
                .ok()
                .filter(|base| !base.trim().is_empty()),
            chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            chat_timeout_seconds: env::var("CHAT_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            max_payload_bytes: env::var("MAX_PAYLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(2 * 1024 * 1024),
        }
    }

    /// Fails startup instead of letting the first chat call fail at request time.
    pub fn validate(&self) -> AppResult<()> {
        if self.openai_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigurationError(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }

        if self.chat_model.trim().is_empty() {
            return Err(AppError::ConfigurationError(
                "CHAT_MODEL must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// `None` when the timeout is disabled with `CHAT_TIMEOUT_SECONDS=0`.
    pub fn chat_timeout(&self) -> Option<Duration> {
        (self.chat_timeout_seconds > 0).then(|| Duration::from_secs(self.chat_timeout_seconds))
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test-key".to_string()),
            openai_api_base: None,
            chat_model: "gpt-test".to_string(),
            chat_timeout_seconds: 5,
            cors_allowed_origin: "http://localhost:3000".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            max_payload_bytes: 64 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.chat_model.is_empty());
        assert!(!config.cors_allowed_origin.is_empty());
        assert!(config.max_payload_bytes > 0);
    }

    #[test]
    fn test_test_config_is_valid() {
        let config = Config::test_config();

        assert!(config.validate().is_ok());
        assert_eq!(config.chat_model, "gpt-test");
        assert_eq!(config.chat_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_validate_rejects_missing_api_key() {
        let config = Config {
            openai_api_key: SecretString::from("  ".to_string()),
            ..Config::test_config()
        };

        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let config = Config {
            chat_timeout_seconds: 0,
            ..Config::test_config()
        };

        assert_eq!(config.chat_timeout(), None);
    }
}
