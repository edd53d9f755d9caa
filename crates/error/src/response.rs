//! # API Response Types
//!
//! Generic API response types for the Groundwork application.
//! Provides a consistent response format for all API endpoints.
//!
//! ## Response Format
//!
//! ```json
//! {
//!   "status": "success",
//!   "data": { ... }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// API response metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ResponseMeta {
    /// Request ID for correlation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Response timestamp.
    #[serde(skip)]
    pub timestamp: DateTime<Utc>,
}

/// API response type.
///
/// This is the generic response type used for all API responses.
/// It provides a consistent format with a status tag, data, and metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum ApiResponse<T> {
    /// Success response.
    Success {
        /// Response data.
        data: T,

        /// Response metadata.
        #[serde(flatten)]
        meta: Option<ResponseMeta>,
    },

    /// Error response.
    Error {
        /// Error code.
        code: String,

        /// Error message.
        message: String,

        /// Response metadata.
        #[serde(flatten)]
        meta: Option<ResponseMeta>,
    },
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    #[inline]
    pub fn success(data: T) -> Self {
        Self::Success { data, meta: None }
    }

    /// Create an error response.
    #[inline]
    pub fn error(code: impl ToString, message: impl ToString) -> Self {
        Self::Error {
            code: code.to_string(),
            message: message.to_string(),
            meta: None,
        }
    }

    /// Returns true for success responses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
