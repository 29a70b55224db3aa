//! Application error types and Axum response conversion.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use smogcast_core::ReadingError;
use smogcast_model::ModelError;

/// Request-level failures. Every variant maps to 400 and leaves the shared
/// state untouched.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
}

impl AppError {
    pub fn bad_request(e: impl std::fmt::Display) -> Self {
        AppError::BadRequest(e.to_string())
    }

    pub fn message(&self) -> &str {
        let AppError::BadRequest(message) = self;
        message
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::BadRequest(format!("Invalid JSON body: {}", e))
    }
}

impl From<BytesRejection> for AppError {
    fn from(e: BytesRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

impl From<ReadingError> for AppError {
    fn from(e: ReadingError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl From<ModelError> for AppError {
    fn from(e: ModelError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::BadRequest(message) = self;
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
    }
}
