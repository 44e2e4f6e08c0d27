use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::pathfinder::PathError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub locations: usize,
    pub edges: usize,
}

/// Custom error type for API endpoints
///
/// Maps path-finding failures onto HTTP status codes: a bad location name is
/// the client's fault (400), while a missing route between two valid
/// locations is a legitimate negative answer (404).
#[derive(Debug)]
pub enum ApiError {
    /// Location name is not a vertex of the graph
    UnknownLocation(String),
    /// Both locations exist but nothing connects them
    NoPathExists { start: String, end: String },
    /// Required query parameter absent
    MissingQueryParam(&'static str),
    /// Query string could not be decoded (repeated key, bad encoding)
    InvalidQueryParam(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::UnknownLocation(name) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid room name: '{}' is not a known location", name),
            ),
            ApiError::NoPathExists { start, end } => (
                StatusCode::NOT_FOUND,
                format!("No path exists between '{}' and '{}'", start, end),
            ),
            ApiError::MissingQueryParam(param) => (
                StatusCode::BAD_REQUEST,
                format!("Missing query parameter: '{}' is required", param),
            ),
            ApiError::InvalidQueryParam(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameter: {}", msg),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQueryParam(rejection.body_text())
    }
}

impl From<PathError> for ApiError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::UnknownLocation(name) => ApiError::UnknownLocation(name),
            PathError::NoPathExists { start, end } => ApiError::NoPathExists { start, end },
        }
    }
}
