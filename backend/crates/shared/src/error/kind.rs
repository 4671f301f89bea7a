//! Error Kind
//!
//! Coarse classification of an [`AppError`](super::app_error::AppError);
//! each kind owns exactly one HTTP status.

use serde::Serialize;

/// Error classification shared by every context
///
/// The finer-grained reason (`NAME_TAKEN`, `EXPIRED`, ...) travels in
/// [`AppError::code`](super::app_error::AppError::code).
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
/// assert_eq!(ErrorKind::ServiceUnavailable.default_code(), "UNAVAILABLE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Rejected input, token or precondition
    BadRequest,
    /// Account exists but may not authenticate
    Unauthorized,
    InternalServerError,
    /// Storage unreachable or exhausted
    ServiceUnavailable,
}

impl ErrorKind {
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Reason phrase, used as the problem `title`
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Code for errors that carry nothing more specific
    #[inline]
    pub const fn default_code(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::InternalServerError => "INTERNAL",
            ErrorKind::ServiceUnavailable => "UNAVAILABLE",
        }
    }

    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
