//! Error mapping for route handlers
//!
//! Every failure crosses the HTTP boundary as a status code plus a short
//! `{message}` body. Store failures keep their detail in the logs only.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::error::CatalogError;

/// Body shape for every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

/// HTTP-facing error: a status code and the message shown to the caller.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::DuplicateName => Self {
                status: StatusCode::CONFLICT,
                message: "Media with same name already exists.".to_string(),
            },
            CatalogError::NotFound => Self {
                status: StatusCode::NOT_FOUND,
                message: "Media not found".to_string(),
            },
            CatalogError::Validation(message) => Self {
                status: StatusCode::BAD_REQUEST,
                message,
            },
            CatalogError::Store(_) => Self {
                status: StatusCode::BAD_REQUEST,
                message: "Unable to complete the operation.".to_string(),
            },
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        CatalogError::Store(err).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorMessage {
                message: self.message,
            }),
        )
            .into_response()
    }
}

/// Extension trait for logging a failed domain call with request context
/// before converting it into an [`ApiError`].
pub trait LogWarn<T> {
    fn warn_context(self, context: &str) -> Result<T, ApiError>;
}

impl<T, E> LogWarn<T> for Result<T, E>
where
    E: Into<ApiError> + std::fmt::Display,
{
    fn warn_context(self, context: &str) -> Result<T, ApiError> {
        self.map_err(|e| {
            warn!("{}: {}", context, e);
            e.into()
        })
    }
}
