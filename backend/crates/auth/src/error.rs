//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::storage_error_kind;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Every variant except `Database` and `Internal` is a client-facing
/// rejection.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token signature does not match the signing secret
    #[error("Token signature mismatch")]
    BadSignature,

    /// Token is past its expiry
    #[error("Token expired")]
    Expired,

    /// Token could not be parsed
    #[error("Token malformed")]
    Malformed,

    /// Token was issued for another user name than the one presented
    #[error("Token identity does not match presented user name")]
    IdentityMismatch,

    /// No such user
    #[error("User not registered")]
    UnknownUser,

    /// No user registered under the name on the requested platform
    #[error("Incorrect username or platform")]
    UnknownPlatformUser,

    /// User exists but may not log in
    #[error("Inactive user")]
    InactiveUser,

    /// Input does not satisfy a syntax rule
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Endpoint disabled by configuration
    #[error("Testing is disabled")]
    ConfigDisabled,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::BadSignature
            | AuthError::Expired
            | AuthError::Malformed
            | AuthError::IdentityMismatch
            | AuthError::UnknownUser
            | AuthError::UnknownPlatformUser
            | AuthError::InvalidInput(_)
            | AuthError::ConfigDisabled => ErrorKind::BadRequest,
            AuthError::InactiveUser => ErrorKind::Unauthorized,
            AuthError::Database(e) => storage_error_kind(e),
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::BadSignature => "BAD_SIGNATURE",
            AuthError::Expired => "EXPIRED",
            AuthError::Malformed => "MALFORMED",
            AuthError::IdentityMismatch => "IDENTITY_MISMATCH",
            AuthError::UnknownUser | AuthError::UnknownPlatformUser => "UNKNOWN_USER",
            AuthError::InactiveUser => "INACTIVE_USER",
            AuthError::InvalidInput(_) => "INVALID_INPUT",
            AuthError::ConfigDisabled => "CONFIG_DISABLED",
            AuthError::Database(_) | AuthError::Internal(_) => self.kind().default_code(),
        }
    }

    /// Whether this is one of the token codec rejections
    pub fn is_token_rejection(&self) -> bool {
        matches!(
            self,
            AuthError::BadSignature | AuthError::Expired | AuthError::Malformed
        )
    }

    /// Message safe to show to the client
    fn client_message(&self) -> String {
        match self {
            AuthError::BadSignature | AuthError::Expired | AuthError::Malformed => {
                "Invalid token".to_string()
            }
            AuthError::IdentityMismatch => "Invalid username".to_string(),
            AuthError::Database(_) => match self.kind() {
                ErrorKind::ServiceUnavailable => "Storage unavailable".to_string(),
                _ => "Database error".to_string(),
            },
            AuthError::Internal(_) => "Internal error".to_string(),
            _ => self.to_string(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.client_message()).with_code(self.code());
        match self {
            AuthError::Expired => err.with_action("Request a new token"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::BadSignature => {
                tracing::warn!("Token with bad signature presented");
            }
            AuthError::IdentityMismatch => {
                tracing::warn!("Token presented for another user name");
            }
            _ => {
                tracing::debug!(error = %self, code = self.code(), "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}

impl From<crate::domain::value_object::user_name::UserNameError> for AuthError {
    fn from(err: crate::domain::value_object::user_name::UserNameError) -> Self {
        AuthError::InvalidInput(err.to_string())
    }
}

impl From<platform::crypto::CryptoError> for AuthError {
    fn from(err: platform::crypto::CryptoError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::BadSignature, StatusCode::BAD_REQUEST),
            (AuthError::Expired, StatusCode::BAD_REQUEST),
            (AuthError::Malformed, StatusCode::BAD_REQUEST),
            (AuthError::IdentityMismatch, StatusCode::BAD_REQUEST),
            (AuthError::UnknownUser, StatusCode::BAD_REQUEST),
            (AuthError::UnknownPlatformUser, StatusCode::BAD_REQUEST),
            (AuthError::InactiveUser, StatusCode::UNAUTHORIZED),
            (
                AuthError::InvalidInput("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (AuthError::ConfigDisabled, StatusCode::BAD_REQUEST),
            (
                AuthError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AuthError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AuthError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_token_rejections_share_client_message() {
        for err in [AuthError::BadSignature, AuthError::Expired, AuthError::Malformed] {
            assert!(err.is_token_rejection());
            let app = err.to_app_error();
            assert_eq!(app.message(), "Invalid token");
            assert_eq!(app.code(), err.code());
        }
        assert_eq!(
            AuthError::Expired.to_app_error().action(),
            Some("Request a new token")
        );
        assert!(!AuthError::IdentityMismatch.is_token_rejection());
    }

    #[test]
    fn test_codes() {
        assert_eq!(AuthError::IdentityMismatch.code(), "IDENTITY_MISMATCH");
        assert_eq!(AuthError::ConfigDisabled.code(), "CONFIG_DISABLED");
        assert_eq!(
            AuthError::Database(sqlx::Error::PoolTimedOut).code(),
            "UNAVAILABLE"
        );
        assert_eq!(AuthError::Internal("x".into()).code(), "INTERNAL");
    }

    #[test]
    fn test_internal_details_not_exposed() {
        let app = AuthError::Internal("secret detail".into()).to_app_error();
        assert!(!app.message().contains("secret detail"));
    }
}
