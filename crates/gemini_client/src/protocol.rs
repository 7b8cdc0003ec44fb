//! Google Gemini wire format.
//!
//! The Gemini API differs from the OpenAI-style chat APIs:
//! - Messages are called "contents"
//! - Role is "user" or "model" (not "assistant")
//! - Content is an array of "parts"
//! - System instructions are separate from messages
//! - Field names are camelCase
//!
//! # Example Gemini Request
//! ```json
//! {
//!   "contents": [
//!     {
//!       "role": "user",
//!       "parts": [{"text": "Hello"}]
//!     }
//!   ],
//!   "generationConfig": {"maxOutputTokens": 1024}
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Gemini request format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiRequest {
    /// Conversation history
    pub contents: Vec<GeminiContent>,
    /// System instructions (separate from messages)
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiContent>,
    /// Generation config (temperature, max tokens, etc.)
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<Value>,
}

impl GeminiRequest {
    /// Build a single-turn request from one user prompt.
    pub fn user_prompt(prompt: impl Into<String>, max_output_tokens: u32) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: Some(prompt.into()),
                }],
            }],
            system_instruction: None,
            generation_config: Some(json!({
                "maxOutputTokens": max_output_tokens
            })),
        }
    }
}

/// Gemini message/content format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    /// "user" or "model" (not "assistant")
    pub role: String,
    /// Array of content parts
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// Gemini content part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Gemini response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// Gemini response candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiCandidate {
    pub content: GeminiContent,
    #[serde(rename = "finishReason", skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate's parts, or `None` when the
    /// response carries no candidates.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        Some(
            candidate
                .content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_request_shape() {
        let request = GeminiRequest::user_prompt("Hello", 1024);

        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role, "user");
        assert_eq!(request.contents[0].parts[0].text.as_deref(), Some("Hello"));
        assert!(request.system_instruction.is_none());
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GeminiRequest::user_prompt("Hello", 512);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["generationConfig"]["maxOutputTokens"], 512);
        // Absent optional fields are omitted entirely
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response = GeminiResponse {
            candidates: vec![GeminiCandidate {
                content: GeminiContent {
                    role: "model".to_string(),
                    parts: vec![
                        GeminiPart {
                            text: Some("Hello ".to_string()),
                        },
                        GeminiPart { text: None },
                        GeminiPart {
                            text: Some("world".to_string()),
                        },
                    ],
                },
                finish_reason: Some("STOP".to_string()),
            }],
        };

        assert_eq!(response.text().as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_response_text_empty_candidates() {
        let response = GeminiResponse { candidates: vec![] };
        assert!(response.text().is_none());
    }

    #[test]
    fn test_response_deserializes_finish_reason() {
        let response: GeminiResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "ok"}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();

        assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("STOP"));
        assert_eq!(response.text().as_deref(), Some("ok"));
    }
}
