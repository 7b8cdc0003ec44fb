//! Google Gemini provider implementation.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{GeminiError, Result};
use crate::protocol::{GeminiRequest, GeminiResponse};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

/// A text-generation backend. Implementations must be stateless and safe to
/// share across concurrent requests.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Generate a completion for a single prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Google Gemini API provider.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_output_tokens: u32,
}

impl GeminiClient {
    /// Create a new Gemini client with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    /// Set a custom base URL (e.g., for proxies or alternative endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model name (e.g., "gemini-1.5-pro", "gemini-1.0-pro").
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Cap the generated output length.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    // Gemini authenticates via a query parameter rather than a header
    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl GenerativeProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GeminiRequest::user_prompt(prompt, self.max_output_tokens);

        log::debug!(
            "Gemini request: {}",
            serde_json::to_string_pretty(&request).unwrap_or_default()
        );

        let response = self
            .client
            .post(self.request_url())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(GeminiError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.map_err(GeminiError::Http)?;

            if status == 401 || status == 403 {
                return Err(GeminiError::Auth(format!(
                    "Gemini authentication failed: {}. Please check your API key.",
                    text
                )));
            }

            return Err(GeminiError::Api(format!(
                "Gemini API error: HTTP {}: {}",
                status, text
            )));
        }

        let body: GeminiResponse = response.json().await.map_err(GeminiError::Http)?;

        log::debug!("Gemini response: {} candidate(s)", body.candidates.len());

        body.text()
            .ok_or_else(|| GeminiError::Api("Gemini response contained no candidates".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client() {
        let client = GeminiClient::new("test_key");
        assert_eq!(client.api_key, "test_key");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.model, DEFAULT_MODEL);
        assert_eq!(client.max_output_tokens, DEFAULT_MAX_OUTPUT_TOKENS);
    }

    #[test]
    fn test_with_base_url() {
        let client = GeminiClient::new("test_key").with_base_url("https://custom.googleapis.com/v1");
        assert_eq!(client.base_url, "https://custom.googleapis.com/v1");
    }

    #[test]
    fn test_with_model() {
        let client = GeminiClient::new("test_key").with_model("gemini-1.0-pro");
        assert_eq!(client.model, "gemini-1.0-pro");
    }

    #[test]
    fn test_chained_builders() {
        let client = GeminiClient::new("test_key")
            .with_base_url("https://custom.api.com")
            .with_model("gemini-ultra")
            .with_max_output_tokens(2048);

        assert_eq!(client.api_key, "test_key");
        assert_eq!(client.base_url, "https://custom.api.com");
        assert_eq!(client.model, "gemini-ultra");
        assert_eq!(client.max_output_tokens, 2048);
    }

    #[test]
    fn test_url_construction() {
        let client = GeminiClient::new("my_api_key_123")
            .with_base_url("https://test.api.com/v1beta")
            .with_model("gemini-custom");

        assert_eq!(
            client.request_url(),
            "https://test.api.com/v1beta/models/gemini-custom:generateContent?key=my_api_key_123"
        );
    }
}
