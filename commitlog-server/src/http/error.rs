//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Every body carries `success: false` and an `error` string.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::server::Environment;
use crate::db::DbError;
use crate::models::ValidationError;

/// Generic message returned for every backend failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Unknown route (404)
    NotFound,

    /// Database error (500, logged). Detail is exposed outside production.
    Database {
        error: DbError,
        environment: Environment,
    },
}

impl ApiError {
    /// Wrap a database error, remembering whether its detail may be shown.
    ///
    /// A filter value the store refused to cast is the caller's mistake
    /// and becomes a 400.
    pub fn database(error: DbError, environment: Environment) -> Self {
        if let Some(reason) = error.rejected_input() {
            tracing::debug!("Store rejected date filter: {}", reason);
            return Self::Validation(ValidationError::InvalidDateFilter {
                reason: reason.to_owned(),
            });
        }
        Self::Database { error, environment }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "error": e.to_string()
                }),
            ),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                json!({
                    "success": false,
                    "error": "Not found"
                }),
            ),
            Self::Database { error, environment } => {
                // Log the actual error, return generic message
                if error.is_pool_timeout() {
                    tracing::error!("Database error (no free connection in pool): {}", error);
                } else {
                    tracing::error!("Database error: {}", error);
                }

                let mut body = json!({
                    "success": false,
                    "error": INTERNAL_ERROR_MESSAGE
                });
                if !environment.is_production() {
                    body["message"] = json!(error.to_string());
                }
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
