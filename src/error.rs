//! Typed errors and HTTP mapping.

use crate::response::{ErrorResponse, ValidationErrorResponse};
use crate::service::Violation;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";
pub const INTERNAL_ERROR: &str = "Error interno del servidor";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Producto no encontrado")]
    NotFound,
    #[error("validation failed: {} violation(s)", .0.len())]
    Validation(Vec<Violation>),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// The request body could not be read or parsed; carries the status axum assigned.
    #[error("rejected body ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

impl From<Vec<Violation>> for AppError {
    fn from(violations: Vec<Violation>) -> Self {
        AppError::Validation(violations)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => error_response(StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND.to_string()),
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrorResponse { errors })).into_response()
            }
            AppError::Rejected { status, message } => error_response(status, message),
            AppError::Db(e) => {
                tracing::error!(error = %e, "store operation failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
            AppError::Config(e) => {
                tracing::error!(error = %e, "configuration error");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
            }
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}
