use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use crate::services::BookingError;

/// Failures that cannot be turned into a form state the user can act on.
///
/// Recoverable outcomes (validation messages, unknown citizen, taken slot) are
/// handled inside the handlers; anything reaching this type becomes a 500.
#[derive(Debug)]
pub enum ApiError {
    DatabaseError(String),

    TemplateError(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::TemplateError(msg) => write!(f, "Template error: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::DatabaseError(msg) => tracing::error!("Database error: {}", msg),
            ApiError::TemplateError(msg) => tracing::error!("Template error: {}", msg),
            ApiError::InternalError(msg) => tracing::error!("Internal error: {}", msg),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(
                "<!doctype html><title>Server error</title>\
                 <h1>Something went wrong</h1>\
                 <p>Please try again later.</p>",
            ),
        )
            .into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(format!("{err:#}"))
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(err: minijinja::Error) -> Self {
        ApiError::TemplateError(err.to_string())
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Database(msg) => ApiError::DatabaseError(msg),
            other => ApiError::InternalError(format!("Unhandled booking outcome: {other}")),
        }
    }
}
