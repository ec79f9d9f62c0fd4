use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures raised by a catalog store. The query and mutation layers never
/// interpret these; they are handed back to the caller unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("invalid product: {0}")]
    Invalid(String),
    #[error("catalog lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("blocking task was cancelled")]
    Blocking(#[from] actix_web::error::BlockingError),
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("catalog request failed: {}", self);
        HttpResponse::build(self.status_code())
            .json(json!({"message": "Unable to load the catalog"}))
    }
}

/// Errors that stop the service before it starts accepting requests.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("failed to run migrations: {0}")]
    Migration(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
