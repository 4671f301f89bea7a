//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Token codec, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - HS256 session tokens bound to a user name and platform
//! - Test token issuance (debug builds of the service only)
//! - Steam token issuance for registered, active accounts
//! - Authorization guard shared with the character endpoints
//!
//! ## Security Model
//! - Token signatures are verified before any claim is read
//! - A token is only accepted for the user name it was issued to
//! - Expiry is exclusive: a token is dead at `exp`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::authorize::{AccountPolicy, AuthorizeUseCase, AuthorizedIdentity};
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::user::User;
    pub use crate::domain::token::Claims;
    pub use crate::domain::value_object::{
        platform::Platform, user_id::UserId, user_name::UserName, user_status::UserStatus,
    };
    pub use crate::presentation::dto::*;
}
