//! # Centralized Error Handling
//!
//! This module provides a unified error handling system for the application.
//! All handler errors are converted to a JSON error body with an appropriate
//! status code at the boundary of the endpoint; nothing propagates uncaught.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::services::email::EmailError;

/// Central application error type covering every failure the handlers can
/// report to a client.
///
/// Email transport errors are logged automatically with their underlying
/// cause; only a generic retry message is exposed to the caller.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(&'static str),

    #[error("email delivery failed")]
    Email(#[from] EmailError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Email(e) = &self {
            // Log the transport failure for operators; the client only sees
            // a generic retry message.
            error!(error = %e, "Email send error");
        }

        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Email(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to send email. Please try again.",
            ),
        };

        let body = Json(ErrorBody { error });
        (status, body).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
