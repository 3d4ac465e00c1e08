//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the conversion of errors
//! into the response envelope. `AppError` is the top-level error type returned by
//! controllers, services and start-up code; it implements `IntoResponse` so handlers
//! can propagate failures with `?`.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use thiserror::Error;

use crate::{model::api::ResponseDto, server::error::config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Covers constraint violations such as a duplicate name as well as I/O failures.
    /// Results in 500 with the raw store error text as envelope data.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure to bind or serve the listening socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body could not be decoded as the expected JSON document.
    ///
    /// Results in 422 Unprocessable Entity.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Query string could not be decoded.
    ///
    /// Results in 422 Unprocessable Entity.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// One or more required fields are missing, empty or malformed.
    ///
    /// Results in 422 Unprocessable Entity listing the offending fields.
    ///
    /// # Fields
    /// - Names of the offending fields
    #[error("Invalid parameter: {}", .0.join(", "))]
    InvalidParameter(Vec<String>),

    /// Resource not found, or the id addressing it is not a valid id.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),
}

/// Converts application errors into failed response envelopes.
///
/// # Returns
/// - 404 Not Found - For `NotFound`
/// - 422 Unprocessable Entity - For `JsonRejection`, `QueryRejection` and `InvalidParameter`
/// - 500 Internal Server Error - For store, configuration and I/O errors
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message, data) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            Self::JsonRejection(rejection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Failed to parse JSON body".to_string(),
                Some(rejection.body_text()),
            ),
            Self::QueryRejection(rejection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid parameter".to_string(),
                Some(rejection.body_text()),
            ),
            Self::InvalidParameter(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid parameter".to_string(),
                Some(fields.join(", ")),
            ),
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database operation failed".to_string(),
                    Some(err.to_string()),
                )
            }
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        ResponseDto::<String>::failure(status, message, data).into_response()
    }
}
