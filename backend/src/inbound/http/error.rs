//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the JSON error envelope:
//!
//! ```text
//! {"success": false, "error": 404, "message": "resource not found",
//!  "code": "not_found", "reason": "...", "details": {...}, "trace_id": "..."}
//! ```
//!
//! Internal errors are redacted: clients never see their `reason` or
//! `details`, only the trace identifier for correlating server logs.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire form of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false`.
    pub success: bool,
    /// HTTP status code, repeated in the body.
    #[schema(example = 404)]
    pub error: u16,
    /// Fixed label for the status, e.g. `resource not found`.
    #[schema(example = "resource not found")]
    pub message: String,
    /// Stable machine-readable error code.
    #[schema(value_type = String, example = "not_found")]
    pub code: ErrorCode,
    /// What went wrong, omitted for internal errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Structured context such as the offending field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Correlation identifier of the failed request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn label_for(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidRequest => "bad request",
        ErrorCode::NotFound => "resource not found",
        ErrorCode::MethodNotAllowed => "method not allowed",
        ErrorCode::Unprocessable => "unprocessable",
        ErrorCode::ServiceUnavailable => "service unavailable",
        ErrorCode::InternalError => "internal server error",
    }
}

fn envelope_for(error: &Error) -> ErrorEnvelope {
    let code = error.code();
    let redact = matches!(code, ErrorCode::InternalError);
    ErrorEnvelope {
        success: false,
        error: status_for(code).as_u16(),
        message: label_for(code).to_owned(),
        code,
        reason: (!redact).then(|| error.message().to_owned()),
        details: if redact {
            None
        } else {
            error.details().cloned()
        },
        trace_id: error.trace_id().map(str::to_owned),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(
                code = ?self.code(),
                reason = %self.message(),
                trace_id = self.trace_id().unwrap_or_default(),
                "request failed"
            );
        }
        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(envelope_for(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("unexpected framework error")
    }
}

fn extractor_error(kind: &str, reason: String) -> actix_web::Error {
    warn!(kind, %reason, "rejected malformed request");
    Error::invalid_request(reason)
        .with_details(json!({ "source": kind }))
        .into()
}

/// JSON body extractor settings: malformed or missing bodies become 400s.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        extractor_error("body", err.to_string())
    })
}

/// Query string extractor settings: unparsable parameters become 400s.
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        extractor_error("query", err.to_string())
    })
}

/// Path extractor settings: unparsable segments become 400s.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, _req: &HttpRequest| {
        extractor_error("path", err.to_string())
    })
}
