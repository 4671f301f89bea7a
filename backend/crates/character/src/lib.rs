//! Character Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Character entity, value objects, repository traits
//! - `application/` - Create and list use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every endpoint authorizes through `auth::AuthorizeUseCase`; character
//! names are unique across all users.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CharacterError, CharacterResult};
pub use infra::memory::InMemoryCharacterRepository;
pub use infra::postgres::PgCharacterRepository;
pub use presentation::router::character_router;
