//! Unified error handling with Sentry integration.
//!
//! Every failure leaving a handler is translated into a generic JSON body
//! carrying a freshly generated `logId`. The same id is attached to the
//! server-side `tracing` event, so a client report can be correlated with the
//! log line without ever exposing internal detail to the outside.

use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::db::RepositoryError;
use crate::services::ServiceError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body or parameters failed validation.
    #[error("validation failed")]
    Validation(HashMap<String, String>),

    /// Service operation failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestErrorResponse {
    /// Application error code; currently always -1.
    pub code: i32,
    /// Generic, client-safe message.
    pub message: String,
    /// Correlates this response with a server-side log event.
    pub log_id: Uuid,
    /// Per-field validation messages, when the request was malformed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<HashMap<String, String>>,
}

impl RestErrorResponse {
    fn new(message: &str, log_id: Uuid, validation_errors: Option<HashMap<String, String>>) -> Self {
        Self {
            code: -1,
            message: message.to_owned(),
            log_id,
            validation_errors,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let log_id = Uuid::new_v4();

        let (status, body) = match &self {
            Self::Validation(errors) => {
                tracing::info!(error = %self, %log_id, "rejected malformed request");
                (
                    StatusCode::BAD_REQUEST,
                    RestErrorResponse::new(
                        "Bad request. There are some request data errors",
                        log_id,
                        Some(errors.clone()),
                    ),
                )
            }
            Self::Service(ServiceError::UserNotFound { user_id }) => {
                tracing::info!(%user_id, %log_id, "user not found");
                (
                    StatusCode::NOT_FOUND,
                    RestErrorResponse::new("User not found", log_id, None),
                )
            }
            Self::Service(ServiceError::Repository(RepositoryError::InvalidArgument(message))) => {
                tracing::info!(error = %self, %log_id, "rejected invalid argument");
                (
                    StatusCode::BAD_REQUEST,
                    RestErrorResponse::new(
                        "Bad request. There are some request data errors",
                        log_id,
                        Some(HashMap::from([("request".to_owned(), (*message).to_owned())])),
                    ),
                )
            }
            Self::Service(ServiceError::Repository(_)) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(error = %self, %log_id, sentry_event_id = %event_id, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    RestErrorResponse::new("Oops. Something wrong happened", log_id, None),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
