//! Client-side telemetry bundle and prompt composition.
//!
//! The browser sends recent console output, error strings, and network
//! request summaries alongside the user's question. The bundle is bounded
//! before it is serialized into the prompt so an arbitrarily chatty page
//! cannot blow up the provider payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Console log lines kept in the processed summary (most recent).
pub const MAX_CONSOLE_ENTRIES: usize = 10;
/// Network request records kept in the processed summary (most recent).
pub const MAX_FETCH_ENTRIES: usize = 5;

pub const SYSTEM_PROMPT: &str = "You are a debugging assistant that helps analyze errors and provide solutions based on console logs, error messages, and network requests.";

/// Telemetry bundle supplied by the client. All fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebugContext {
    #[serde(default)]
    pub console: Vec<String>,
    #[serde(default)]
    pub error: Vec<String>,
    #[serde(default)]
    pub fetch: Vec<FetchRecord>,
}

/// Summary of one network request captured on the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchRecord {
    pub url: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(
        default,
        rename = "statusText",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_text: Option<String>,
    /// Anything else the client recorded (timings, request ids, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Bounded view over a `DebugContext`: the last `MAX_CONSOLE_ENTRIES`
/// console lines and last `MAX_FETCH_ENTRIES` requests, errors unfiltered.
#[derive(Debug, Serialize)]
struct ProcessedContext<'a> {
    console: &'a [String],
    error: &'a [String],
    fetch: &'a [FetchRecord],
}

fn tail<T>(items: &[T], cap: usize) -> &[T] {
    &items[items.len().saturating_sub(cap)..]
}

/// Render the context bundle as a bounded JSON summary.
///
/// An absent context yields the literal `No context provided`; a
/// serialization failure degrades to an inline error string instead of
/// failing the request.
pub fn process_context(context: Option<&DebugContext>) -> String {
    let Some(ctx) = context else {
        return "No context provided".to_string();
    };

    let processed = ProcessedContext {
        console: tail(&ctx.console, MAX_CONSOLE_ENTRIES),
        error: &ctx.error,
        fetch: tail(&ctx.fetch, MAX_FETCH_ENTRIES),
    };

    match serde_json::to_string_pretty(&processed) {
        Ok(json) => json,
        Err(e) => format!("Error processing context: {e}"),
    }
}

/// Compose the full prompt: fixed system text, the user's message, then the
/// serialized context summary.
pub fn build_prompt(message: &str, context: Option<&DebugContext>) -> String {
    format!(
        "{SYSTEM_PROMPT}\n\n{message}\n\nContext:\n{}",
        process_context(context)
    )
}
