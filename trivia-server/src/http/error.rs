//! API error type with IntoResponse
//!
//! Every failure becomes `{success: false, error: <status>, message: "<status> <text>"}`.
//! 422 and 500 details are logged, never returned.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed body or invalid field (400)
    BadRequest { reason: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Path exists but not for this method (405)
    MethodNotAllowed,

    /// Store rejected a mutation (422, logged)
    Unprocessable(StoreError),

    /// Anything else (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest {
            reason: reason.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Map a failed insert/delete. A row that vanished stays a 404.
    pub fn unprocessable(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            other => Self::Unprocessable(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message, always prefixed with the status code.
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest { reason } => format!("400 Bad request: {}", reason),
            Self::NotFound { resource, id } => {
                format!("404 Resource not found: {} '{}'", resource, id)
            }
            Self::MethodNotAllowed => {
                "405 Method not allowed for the requested endpoint".to_string()
            }
            Self::Unprocessable(_) => {
                "422 Unprocessable entity: the request was well formed but could not be applied"
                    .to_string()
            }
            Self::Internal { .. } => "500 Internal server error, please try again later".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Unprocessable(e) => tracing::error!("Unprocessable request: {}", e),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
            other => tracing::warn!(status = other.status().as_u16(), "{}", other.message()),
        }

        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::bad_request(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}
