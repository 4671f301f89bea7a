//! Domain Layer

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::character::{Character, NewCharacter};
pub use repository::CharacterRepository;
