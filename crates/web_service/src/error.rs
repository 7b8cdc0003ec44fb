use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request body. Deliberately carries no detail.
    #[error("Unknown error occurred")]
    ParseError,

    #[error("{0}")]
    Provider(#[from] gemini_client::GeminiError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct JsonError {
    error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        // Every failure collapses to 500 with an error string
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("MCP API error: {self}");
        HttpResponse::build(self.status_code()).json(JsonError {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_uses_fallback_message() {
        assert_eq!(AppError::ParseError.to_string(), "Unknown error occurred");
    }

    #[test]
    fn test_provider_error_keeps_message() {
        let err = AppError::from(gemini_client::GeminiError::Api("quota exceeded".to_string()));
        assert_eq!(err.to_string(), "API error: quota exceeded");
    }

    #[test]
    fn test_all_errors_map_to_500() {
        let errors = [
            AppError::ParseError,
            AppError::from(gemini_client::GeminiError::Api("x".to_string())),
            AppError::from(anyhow::anyhow!("boom")),
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
