use std::sync::Arc;

use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{middleware::Logger, web, App, HttpServer, ResponseError};
use gemini_client::{GeminiClient, GenerativeProvider};
use log::{error, info};

use crate::config::ServiceConfig;
use crate::controllers::mcp_controller;
use crate::error::AppError;

pub struct AppState {
    pub provider: Arc<dyn GenerativeProvider>,
}

/// Configure API routes and body parsing.
pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(web::scope("/api").configure(mcp_controller::config));
}

/// Malformed bodies answer 500 with the generic error shape, never 400.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        error!("Failed to parse request body: {err}");
        InternalError::from_response(err, AppError::ParseError.error_response()).into()
    })
}

// Mirrors the CORS policy the frontend was built against
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "DELETE", "PATCH", "POST", "PUT"])
        .allowed_headers(vec![
            "X-CSRF-Token",
            "X-Requested-With",
            "Accept",
            "Accept-Version",
            "Content-Length",
            "Content-MD5",
            "Content-Type",
            "Date",
            "X-Api-Version",
        ])
        .supports_credentials()
        .max_age(3600)
}

pub async fn run(config: ServiceConfig) -> Result<(), String> {
    info!("Starting web service...");

    let mut client = GeminiClient::new(config.api_key).with_model(config.model);
    if let Some(base_url) = config.base_url {
        client = client.with_base_url(base_url);
    }
    let provider: Arc<dyn GenerativeProvider> = Arc::new(client);

    let app_state = web::Data::new(AppState { provider });
    let port = config.port;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(cors())
            .configure(app_config)
    })
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Starting web service on http://127.0.0.1:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
