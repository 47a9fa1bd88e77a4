use std::fmt;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Client-settable ship fields, named as they appear on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipField {
    Name,
    Planet,
    Category,
    ProductionDate,
    IsUsed,
    Speed,
    CrewSize,
}

impl ShipField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Planet => "planet",
            Self::Category => "category",
            Self::ProductionDate => "productionDate",
            Self::IsUsed => "isUsed",
            Self::Speed => "speed",
            Self::CrewSize => "crewSize",
        }
    }
}

impl fmt::Display for ShipField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum ShipError {
    #[error("Ship ID {0} is not a positive integer")]
    InvalidId(i64),
    #[error("Ship ID {0} not found")]
    NotFound(i64),
    #[error("Missing required field: {0}")]
    MissingField(ShipField),
    #[error("Invalid value for field: {0}")]
    InvalidField(ShipField),
    #[error("Invalid query parameter {param}: {reason}")]
    InvalidQuery { param: &'static str, reason: String },
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl IntoResponse for ShipError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        let error = match self {
            Self::NotFound(_) => "Ship not found".to_string(),
            err => err.to_string(),
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}

impl From<QueryRejection> for ShipError {
    fn from(rejection: QueryRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ShipError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ShipError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}
