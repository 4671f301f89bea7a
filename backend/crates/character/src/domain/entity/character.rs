//! Character Entity

use auth::models::UserId;

use crate::domain::value_object::{
    character_id::CharacterId, character_name::CharacterName, race::Race,
};

/// Stored character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub character_id: CharacterId,
    /// Owning user
    pub user_id: UserId,
    pub character_name: CharacterName,
    pub race: Race,
}

/// Character about to be inserted (no key yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacter {
    pub user_id: UserId,
    pub character_name: CharacterName,
    pub race: Race,
}

impl NewCharacter {
    pub fn new(user_id: UserId, character_name: CharacterName, race: Race) -> Self {
        Self {
            user_id,
            character_name,
            race,
        }
    }

    /// Attach the key assigned by storage
    pub fn into_character(self, character_id: CharacterId) -> Character {
        Character {
            character_id,
            user_id: self.user_id,
            character_name: self.character_name,
            race: self.race,
        }
    }
}
