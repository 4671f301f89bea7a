//! Application Layer
//!
//! Use cases and application services.

pub mod create_character;
pub mod list_characters;

// Re-exports
pub use create_character::{CreateCharacterInput, CreateCharacterUseCase};
pub use list_characters::ListCharactersUseCase;
