//! Error types for the Hangar server application.
//!
//! Domain-specific errors live in their own modules and are aggregated into [`Error`]. All
//! errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic
//! error definitions.

pub mod config;
pub mod ship;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, ship::ShipError},
};

/// Main error type for the Hangar server application.
///
/// Uses `thiserror`'s `#[from]` attribute so domain and library errors convert automatically
/// via the `?` operator. The `IntoResponse` implementation maps client errors to 4xx responses
/// and everything else to a logged 500 response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Ship request error (invalid ID, invalid field, record not found).
    #[error(transparent)]
    ShipError(#[from] ShipError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Logger initialization error, a global subscriber was already installed.
    #[error(transparent)]
    LoggerError(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid ship ID, field value, query parameter, or request body
/// - 404 Not Found - No ship exists for the requested ID
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ShipError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
