// ABOUTME: Unified error handling with standard codes and HTTP response formatting
// ABOUTME: AppError type with JSON error body conversion for axum handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Unified Error Handling
//!
//! The server has a deliberately small error taxonomy: the only error class
//! is malformed input parameters, caught at the API boundary. The planner
//! itself has no fallible operations since the catalog is non-empty by
//! construction.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Request parameter failed to parse or validate
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
}

impl ErrorCode {
    /// HTTP status code for this error class
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
        }
    }
}

/// Application error with a code and human-readable message
#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Malformed or unparseable request input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }
}

/// Result type alias using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

/// JSON body returned for error responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorResponseDetails,
}

/// Inner error payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code string (e.g. `INVALID_INPUT`)
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message.clone(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code.http_status();
        let body = ErrorResponse::from(&self);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let error = AppError::invalid_input("count must be an integer");
        assert_eq!(error.code.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_response_carries_code_and_message() {
        let error = AppError::invalid_input("bad count");
        let body = serde_json::to_value(ErrorResponse::from(&error)).unwrap();
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
        assert_eq!(body["error"]["message"], "bad count");
    }

    #[test]
    fn every_error_code_reaches_the_wire_as_bad_request() {
        // The taxonomy has exactly one class; anything added later must pick
        // an explicit status here.
        let response = AppError::invalid_input("bad goal").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
