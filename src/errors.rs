use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::validation::ValidationErrors;

pub const MALFORMED_BODY_MESSAGE: &str = "Gecersiz istek govdesi.";
pub const VALIDATION_FAILED_MESSAGE: &str = "Form verileri gecersiz.";
pub const MAIL_NOT_CONFIGURED_MESSAGE: &str = "Mail servisi yapilandirilmamis.";
pub const SENDER_MISSING_MESSAGE: &str =
    "RESEND_FROM_EMAIL eksik. Resend verified domain adresi tanimlanmali.";
pub const SEND_FAILED_MESSAGE: &str = "E-posta gonderimi basarisiz.";

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Request body could not be parsed as JSON.
    MalformedBody(String),
    /// Submission failed schema validation.
    ValidationFailed(ValidationErrors),
    /// Required configuration is missing; the message names what is missing.
    ServiceUnavailable(String),
    /// The email capability reported an error.
    SendFailed {
        /// Message extracted from the underlying error.
        error_message: String,
        /// Operator hint about a likely cause, if one is known.
        hint: Option<String>,
        /// Whether diagnostics may be attached to the response.
        expose_debug: bool,
    },
    /// Resource not found error.
    NotFound(String),
    /// Internal server error.
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MalformedBody(detail) => write!(f, "Malformed body: {}", detail),
            AppError::ValidationFailed(errors) => write!(f, "Validation failed: {}", errors),
            AppError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            AppError::SendFailed { error_message, .. } => {
                write!(f, "Email send failed: {}", error_message)
            }
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Diagnostic payload attached to send failures outside production.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    pub error_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// JSON body for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugInfo>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedBody(_) | AppError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_)
            | AppError::SendFailed { .. }
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            AppError::MalformedBody(_) => ErrorBody {
                message: MALFORMED_BODY_MESSAGE.to_string(),
                debug: None,
            },
            AppError::ValidationFailed(_) => ErrorBody {
                message: VALIDATION_FAILED_MESSAGE.to_string(),
                debug: None,
            },
            AppError::ServiceUnavailable(msg) | AppError::NotFound(msg) => ErrorBody {
                message: msg.clone(),
                debug: None,
            },
            AppError::SendFailed {
                error_message,
                hint,
                expose_debug,
            } => ErrorBody {
                message: SEND_FAILED_MESSAGE.to_string(),
                debug: expose_debug.then(|| DebugInfo {
                    error_message: error_message.clone(),
                    hint: hint.clone(),
                }),
            },
            AppError::InternalError(_) => ErrorBody {
                message: "Internal server error".to_string(),
                debug: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    /// Maps each error variant to its status code and JSON body.
    fn into_response(self) -> Response {
        match &self {
            AppError::MalformedBody(detail) => {
                tracing::warn!("Rejected unparseable request body: {}", detail);
            }
            AppError::ValidationFailed(errors) => {
                tracing::warn!(fields = ?errors.fields(), "Rejected invalid contact submission");
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::error!("Mail service not configured: {}", msg);
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
            }
            // Send failures are logged by the dispatcher with full context
            AppError::SendFailed { .. } | AppError::NotFound(_) => {}
        }

        (self.status(), Json(self.body())).into_response()
    }
}
