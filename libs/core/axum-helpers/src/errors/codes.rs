//! Type-safe error codes for structured logging.
//!
//! Each code carries a SCREAMING_SNAKE_CASE identifier, an integer for log
//! aggregation and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error codes attached to every error log line as `error_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Query parameters failed `validator` rules
    ValidationError,

    /// Query string could not be deserialized
    QueryExtraction,

    /// Request was rejected by a domain rule
    BadRequest,

    /// Requested route or resource does not exist
    NotFound,

    // Upstream errors (5000-5999)
    /// An upstream data provider failed
    UpstreamError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::QueryExtraction => "QUERY_EXTRACTION",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::UpstreamError => "UPSTREAM_ERROR",
        }
    }

    /// Integer code for logs and dashboards.
    ///
    /// - 1000-1999: client errors
    /// - 5000-5999: upstream errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::QueryExtraction => 1002,
            Self::BadRequest => 1003,
            Self::NotFound => 1004,
            Self::UpstreamError => 5001,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::QueryExtraction => "Failed to parse query string",
            Self::BadRequest => "Bad request",
            Self::NotFound => "Not Found",
            Self::UpstreamError => "Upstream data provider unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
