use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::context::{build_prompt, DebugContext};
use crate::error::AppError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct McpRequest {
    pub message: String,
    pub context: Option<DebugContext>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub response: String,
}

/// Configure MCP debug-assistant routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(debug_assist);
}

/// Forward a debugging question plus client telemetry to the model and
/// relay the generated answer.
#[post("/mcp")]
pub async fn debug_assist(
    request: web::Json<McpRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let McpRequest { message, context } = request.into_inner();

    log::info!(
        "MCP debug request: message_len={}, has_context={}",
        message.len(),
        context.is_some()
    );

    let prompt = build_prompt(&message, context.as_ref());
    log::debug!("Composed prompt:\n{prompt}");

    let text = state.provider.generate(&prompt).await?;

    Ok(HttpResponse::Ok().json(McpResponse { response: text }))
}
