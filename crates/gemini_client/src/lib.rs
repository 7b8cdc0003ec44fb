pub mod error;
pub mod protocol;
pub mod provider;

pub use error::{GeminiError, Result};
pub use protocol::{GeminiCandidate, GeminiContent, GeminiPart, GeminiRequest, GeminiResponse};
pub use provider::{GeminiClient, GenerativeProvider};
pub use provider::{DEFAULT_BASE_URL, DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL};
