//! Configuration management for web service
//!
//! Supports loading configuration from environment variables with fallback to defaults.

use std::env;

pub const DEFAULT_PORT: u16 = 8080;

/// Service configuration.
///
/// Environment variables:
/// - `GEMINI_API_KEY`: Gemini API key (required)
/// - `GEMINI_MODEL`: model name (default: "gemini-1.5-pro")
/// - `GEMINI_BASE_URL`: provider endpoint override (default: official endpoint)
/// - `APP_PORT`: listen port (default: 8080)
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub port: u16,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| "GEMINI_API_KEY environment variable is not set".to_string())?;

        Ok(Self {
            api_key,
            model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| gemini_client::DEFAULT_MODEL.to_string()),
            base_url: env::var("GEMINI_BASE_URL").ok(),
            port: env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_has_sensible_defaults() {
        env::set_var("GEMINI_API_KEY", "test_key");
        env::remove_var("GEMINI_MODEL");
        env::remove_var("APP_PORT");

        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test_key");
        assert_eq!(config.model, gemini_client::DEFAULT_MODEL);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.base_url.is_none());
    }
}
