use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use procure_core::error::CoreError;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Refusals by a domain rule ([`CoreError::Conflict`]) are answered with the
/// bare message as `text/plain`; every other failure renders the HTML error
/// page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `procure_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => {
                    return (
                        StatusCode::CONFLICT,
                        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
                        msg.clone(),
                    )
                        .into_response();
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, Html(views::error::page(status, &message))).into_response()
    }
}

impl AppError {
    /// Report a foreign key violation as a [`CoreError::Conflict`] with
    /// `message`. Any other error is passed through unchanged.
    ///
    /// Used on deletes, where the violation means the row is still
    /// referenced rather than that a submitted id was unknown.
    pub fn conflict_on_foreign_key(err: sqlx::Error, message: &str) -> AppError {
        let still_referenced = matches!(
            &err,
            sqlx::Error::Database(db_err)
                if matches!(db_err.kind(), sqlx::error::ErrorKind::ForeignKeyViolation)
        );
        if still_referenced {
            AppError::Core(CoreError::Conflict(message.to_string()))
        } else {
            AppError::Database(err)
        }
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key and NOT NULL violations map to 400: the submitted form
///   referenced a missing record or left a required field empty. Deletes
///   go through [`AppError::conflict_on_foreign_key`] instead.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => match db_err.kind() {
            sqlx::error::ErrorKind::ForeignKeyViolation => (
                StatusCode::BAD_REQUEST,
                "Referenced vendor or product does not exist".to_string(),
            ),
            sqlx::error::ErrorKind::NotNullViolation => (
                StatusCode::BAD_REQUEST,
                "A required field is missing".to_string(),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                internal()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
