pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors};

/// Error body returned by every endpoint.
///
/// `detail` is a plain message for domain errors and a list of
/// `{loc, msg, type}` entries for request validation failures.
///
/// ```json
/// { "detail": "Market average price must be greater than zero." }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: Value,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            detail: Value::String(message.into()),
        }
    }
}

/// Cross-cutting HTTP errors shared by all domain routers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Bad Gateway: {0}")]
    BadGateway(String),
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::QueryExtractorRejection(_) => ErrorCode::QueryExtraction,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::BadGateway(_) => ErrorCode::UpstreamError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.error_code();

        let (status, detail) = match self {
            AppError::QueryExtractorRejection(e) => {
                tracing::info!(error_code = code.code(), "Query extraction error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    json!([{
                        "loc": ["query"],
                        "msg": e.body_text(),
                        "type": "query_parse",
                    }]),
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(error_code = code.code(), "Validation error: {:?}", e);
                (StatusCode::BAD_REQUEST, validation_detail(&e, "query"))
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = code.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, Value::String(msg))
            }
            AppError::BadGateway(msg) => {
                tracing::warn!(error_code = code.code(), "Upstream error: {}", msg);
                (StatusCode::BAD_GATEWAY, Value::String(msg))
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Flattens `validator` errors into `[{loc, msg, type}]` entries.
///
/// `source` names where the field came from (`"query"`, `"body"`) and becomes
/// the first element of `loc`. Entries are sorted by field name so the output
/// is stable across runs.
pub fn validation_detail(errors: &ValidationErrors, source: &str) -> Value {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let entries: Vec<Value> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                json!({
                    "loc": [source, field.as_ref()],
                    "msg": validation_message(err),
                    "type": err.code,
                })
            })
        })
        .collect();

    Value::Array(entries)
}

fn validation_message(err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }

    match (err.code.as_ref(), err.params.get("min"), err.params.get("max")) {
        ("length", Some(min), None) => format!("String should have at least {min} characters"),
        ("length", None, Some(max)) => format!("String should have at most {max} characters"),
        ("length", Some(min), Some(max)) => {
            format!("String should have between {min} and {max} characters")
        }
        (code, _, _) => format!("Invalid value ({code})"),
    }
}

/// Builds a `{"detail": message}` response with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>, error_code: ErrorCode) -> Response {
    let message = message.into();
    tracing::debug!(error_code = error_code.code(), "{}", message);
    (status, Json(ErrorResponse::message(message))).into_response()
}
