//! Application error type shared by services, repositories and handlers.
//!
//! [`AppError`] renders as a JSON body for API routes:
//!
//! ```json
//! { "error": { "code": "conflict", "message": "...", "details": {} } }
//! ```
//!
//! HTML routes wrap it in [`crate::web::error::WebError`] instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::scheduling::SchedulingError;

/// Name of the unique index allowing one show per artist per calendar day.
pub const SHOW_PER_DAY_CONSTRAINT: &str = "shows_artist_day_key";

/// Message shown when the store rejects a show the validator accepted.
pub const BOOKING_RACE_MESSAGE: &str = "This show could not be booked, please try again";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned inside [`ErrorBody`].
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Machine-readable error code used in JSON bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Conflict { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<SchedulingError> for AppError {
    fn from(e: SchedulingError) -> Self {
        let details = json!({ "kind": e.kind() });
        match e {
            SchedulingError::DoubleBooked { .. } => AppError::conflict(e.to_string(), details),
            SchedulingError::PastDate { .. } | SchedulingError::UnavailableDay { .. } => {
                AppError::bad_request(e.to_string(), details)
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Validation failed",
            serde_json::to_value(&e).unwrap_or_default(),
        )
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            if db.constraint() == Some(SHOW_PER_DAY_CONSTRAINT) {
                return AppError::conflict(
                    BOOKING_RACE_MESSAGE,
                    json!({
                        "kind": "constraint_violation",
                        "constraint": SHOW_PER_DAY_CONSTRAINT,
                    }),
                );
            }
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        if db.is_foreign_key_violation() {
            return AppError::not_found(
                "Referenced record does not exist",
                json!({ "constraint": db.constraint() }),
            );
        }
    }

    tracing::error!("Database error: {}", e);
    AppError::internal("Database error", json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    #[test]
    fn test_status_and_code() {
        let err = AppError::not_found("Artist not found", json!({"id": 1}));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not_found");
        assert_eq!(err.message(), "Artist not found");
        assert_eq!(err.details()["id"], 1);
        assert_eq!(err.to_string(), "Artist not found");
    }

    #[test]
    fn test_double_booking_maps_to_conflict() {
        let err: AppError = SchedulingError::DoubleBooked {
            artist: "Guns N Petals".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            existing_show_id: 3,
        }
        .into();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.details()["kind"], "double_booked");
        assert!(err.message().contains("2024-06-10"));
    }

    #[test]
    fn test_unavailable_day_maps_to_validation() {
        let err: AppError = SchedulingError::UnavailableDay {
            artist: "Guns N Petals".to_string(),
            weekday: Weekday::Tue,
            guidance: "Guns N Petals is available on Monday".to_string(),
        }
        .into();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(
            err.message(),
            "Guns N Petals is not available on Tuesday; Guns N Petals is available on Monday"
        );
    }

    #[test]
    fn test_non_database_sqlx_error_is_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
