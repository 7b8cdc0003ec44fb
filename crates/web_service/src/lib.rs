pub mod config;
pub mod context;
pub mod controllers;
pub mod error;
pub mod server;

pub use config::ServiceConfig;
pub use error::AppError;
pub use server::AppState;
