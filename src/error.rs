//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// Error payload sent to clients: `{"err": "<message>"}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub err: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // RowNotFound is the distinguished not-found condition from the
            // store; every other database error is a generic backend failure.
            AppError::Db(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            err: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Configuration failure at startup. Never mapped to an HTTP response.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing key: {0}")]
    MissingKey(&'static str),
    #[error("unsupported db driver: {0} (only 'postgres' is compiled in)")]
    UnsupportedDriver(String),
}
