//! # Error Handling Middleware
//!
//! Axum integration for converting application errors into HTTP responses.
//!
//! ## Usage
//!
//! ```rust
//! use error::{middleware::ErrorHandler, AppError};
//!
//! let handler = ErrorHandler::new(false);
//! let error = AppError::not_found("User not found");
//! let response = handler.to_response(&error);
//! ```

use axum::{body::Body, http::StatusCode, response::Response};

use crate::{response::ApiResponse, AppError};

/// Error handler that converts errors to HTTP responses.
#[derive(Clone)]
pub struct ErrorHandler {
    /// Whether to include error details in response.
    pub include_details: bool,
}

impl ErrorHandler {
    /// Create a new error handler.
    #[inline]
    pub fn new(include_details: bool) -> Self {
        Self { include_details }
    }

    /// Convert an error to a response.
    pub fn to_response(&self, err: &AppError) -> Response {
        let status = err.status();
        let code = err.code();
        let message = if self.include_details {
            err.message()
        }
        else {
            match status {
                StatusCode::INTERNAL_SERVER_ERROR => "Internal server error".to_string(),
                StatusCode::NOT_FOUND => "Resource not found".to_string(),
                StatusCode::BAD_REQUEST => "Bad request".to_string(),
                StatusCode::UNAUTHORIZED => "Unauthorized".to_string(),
                StatusCode::FORBIDDEN => "Forbidden".to_string(),
                StatusCode::SERVICE_UNAVAILABLE => "Service unavailable".to_string(),
                _ => "An error occurred".to_string(),
            }
        };

        let response = ApiResponse::<()>::error(code, message);

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&response).unwrap_or_default()))
            .unwrap_or_default()
    }
}

impl Default for ErrorHandler {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Allows handlers to return `error::Result<T>` directly from axum routes.
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.code(), error = %self, "Request failed");
        ErrorHandler::new(false).to_response(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_handler() {
        let handler = ErrorHandler::new(false);
        let err = AppError::not_found("User not found");
        let response = handler.to_response(&err);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_handler_with_details() {
        let handler = ErrorHandler::new(true);
        let err = AppError::internal("Detailed error message");
        let response = handler.to_response(&err);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_cancelled_maps_to_service_unavailable() {
        let handler = ErrorHandler::new(false);
        let err = AppError::cancelled("shutting down");
        let response = handler.to_response(&err);

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
