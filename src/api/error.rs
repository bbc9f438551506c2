use actix_web::error::JsonPayloadError;
use actix_web::{error::ResponseError, http::StatusCode, HttpRequest, HttpResponse};
use std::fmt;

use crate::core::DocumentError;
use crate::metrics;
use crate::models::FieldError;

#[derive(Debug)]
pub struct ApiError {
    message: String,
    status_code: StatusCode,
    details: Vec<FieldError>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status_code: StatusCode) -> Self {
        ApiError {
            message: message.into(),
            status_code,
            details: Vec::new(),
        }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Request body rejected before any computation, with per-field details.
    pub fn validation(details: Vec<FieldError>) -> Self {
        ApiError {
            message: "Request validation failed".to_string(),
            status_code: StatusCode::UNPROCESSABLE_ENTITY,
            details,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let mut body = serde_json::json!({
            "error": self.message,
            "status": self.status_code.as_u16()
        });
        if !self.details.is_empty() {
            body["details"] = serde_json::json!(self.details);
        }
        HttpResponse::build(self.status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        self.status_code
    }
}

impl From<DocumentError> for ApiError {
    fn from(err: DocumentError) -> Self {
        metrics::GENERATION_FAILURES
            .with_label_values(&[err.stage()])
            .inc();
        ApiError::internal_server_error(format!("Error generating PDF: {}", err))
    }
}

/// Maps body extraction failures (bad JSON, wrong types, unknown document
/// type, missing fields) onto the validation response. This is the only
/// place a request is rejected for its content.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    metrics::GENERATION_FAILURES
        .with_label_values(&["validation"])
        .inc();

    let api_error = match &err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            ApiError::new(err.to_string(), StatusCode::PAYLOAD_TOO_LARGE)
        }
        JsonPayloadError::ContentType => {
            ApiError::new(err.to_string(), StatusCode::UNSUPPORTED_MEDIA_TYPE)
        }
        JsonPayloadError::Deserialize(e) => {
            ApiError::validation(vec![FieldError::new("body", e.to_string())])
        }
        _ => ApiError::new(err.to_string(), StatusCode::BAD_REQUEST),
    };

    tracing::debug!(error = %err, "Rejected request body");
    api_error.into()
}

pub type ApiResult<T> = Result<T, ApiError>;
