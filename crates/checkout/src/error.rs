//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`.
//!
//! Step rejections and malformed request bodies are both answered with a
//! single bad-request status and a JSON `{"error": "..."}` body; the
//! rejection message is passed through verbatim.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use wavecart_core::checkout::{AccountError, CompletionError, PaymentError, ShippingError};

/// Application-level error type for the checkout server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A step submission was rejected; the message is user-facing.
    #[error("{0}")]
    Rejection(String),

    /// The request could not be decoded before business validation ran.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body for failure responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        Self::Rejection(err.to_string())
    }
}

impl From<ShippingError> for AppError {
    fn from(err: ShippingError) -> Self {
        Self::Rejection(err.to_string())
    }
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        Self::Rejection(err.to_string())
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        Self::Rejection(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry; rejections are expected traffic
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Rejection(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match self {
            Self::Rejection(message) => message,
            Self::BadRequest(message) => message,
            Self::Internal(_) => "Internal server error".to_owned(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
