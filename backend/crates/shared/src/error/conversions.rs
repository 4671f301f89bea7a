//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

#[cfg(feature = "sqlx")]
use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for super::app_error::AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            Self::bad_request(format!("JSON parse error: {}", err))
                .with_code("INVALID_INPUT")
                .with_source(err)
        } else {
            Self::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// PostgreSQL SQLSTATE for `unique_violation`
#[cfg(feature = "sqlx")]
pub const UNIQUE_VIOLATION: &str = "23505";

/// Whether a storage error is a uniqueness-constraint violation
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err
            .code()
            .is_some_and(|code| code.as_ref() == UNIQUE_VIOLATION),
        _ => false,
    }
}

/// Classify a storage error as either "store unavailable" (503) or an
/// internal fault (500)
#[cfg(feature = "sqlx")]
pub fn storage_error_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // Class 08: Connection Exception
            Some(code) if code.starts_with("08") => ErrorKind::ServiceUnavailable,
            // Class 53: Insufficient Resources
            Some("53000" | "53100" | "53200" | "53300") => ErrorKind::ServiceUnavailable,
            // Class 57: Operator Intervention
            Some("57000" | "57014" | "57P01" | "57P02" | "57P03") => {
                ErrorKind::ServiceUnavailable
            }
            _ => ErrorKind::InternalServerError,
        },
        _ => ErrorKind::InternalServerError,
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match storage_error_kind(&err) {
            ErrorKind::ServiceUnavailable => {
                AppError::service_unavailable("Storage unavailable").with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs, plus a stable `code`
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "code": self.code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
