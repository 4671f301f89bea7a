//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use auth::models::UserName;

use crate::domain::entity::character::{Character, NewCharacter};
use crate::domain::value_object::{character_id::CharacterId, character_name::CharacterName};
use crate::error::CharacterResult;

/// Character storage
#[trait_variant::make(CharacterRepository: Send)]
pub trait LocalCharacterRepository {
    /// Advisory check; the unique constraint on insert is authoritative
    async fn name_exists(&self, character_name: &CharacterName) -> CharacterResult<bool>;

    /// Insert in a single statement.
    /// A duplicate name fails with `CharacterError::NameTaken`.
    async fn create(&self, character: &NewCharacter) -> CharacterResult<CharacterId>;

    /// All characters owned by the user, in no particular order
    async fn find_by_user_name(&self, user_name: &UserName) -> CharacterResult<Vec<Character>>;
}
