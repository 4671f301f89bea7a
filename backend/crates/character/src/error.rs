//! Character Error Types

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::storage_error_kind;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::character_name::CharacterNameError;

pub type CharacterResult<T> = Result<T, CharacterError>;

#[derive(Debug, Error)]
pub enum CharacterError {
    /// Authorization failed
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Name already exist")]
    NameTaken,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CharacterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CharacterError::Auth(e) => e.kind(),
            CharacterError::NameTaken | CharacterError::InvalidInput(_) => ErrorKind::BadRequest,
            CharacterError::Database(e) => storage_error_kind(e),
            CharacterError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            CharacterError::Auth(e) => e.code(),
            CharacterError::NameTaken => "NAME_TAKEN",
            CharacterError::InvalidInput(_) => "INVALID_INPUT",
            CharacterError::Database(_) | CharacterError::Internal(_) => {
                self.kind().default_code()
            }
        }
    }

    pub fn to_app_error(&self) -> AppError {
        match self {
            CharacterError::Auth(e) => e.to_app_error(),
            CharacterError::Database(_) => {
                let message = match self.kind() {
                    ErrorKind::ServiceUnavailable => "Storage unavailable",
                    _ => "Database error",
                };
                AppError::new(self.kind(), message).with_code(self.code())
            }
            CharacterError::Internal(_) => {
                AppError::internal("Internal error").with_code(self.code())
            }
            CharacterError::NameTaken => AppError::new(self.kind(), self.to_string())
                .with_code(self.code())
                .with_action("Choose a different character name"),
            CharacterError::InvalidInput(_) => {
                AppError::new(self.kind(), self.to_string()).with_code(self.code())
            }
        }
    }

    fn log(&self) {
        match self {
            CharacterError::Auth(e) => e.log(),
            CharacterError::Database(e) => {
                tracing::error!(error = %e, "Character database error");
            }
            CharacterError::Internal(msg) => {
                tracing::error!(message = %msg, "Character internal error");
            }
            _ => {
                tracing::debug!(error = %self, code = self.code(), "Character request rejected");
            }
        }
    }
}

impl IntoResponse for CharacterError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<CharacterError> for AppError {
    fn from(err: CharacterError) -> Self {
        err.to_app_error()
    }
}

impl From<CharacterNameError> for CharacterError {
    fn from(err: CharacterNameError) -> Self {
        CharacterError::InvalidInput(err.to_string())
    }
}
