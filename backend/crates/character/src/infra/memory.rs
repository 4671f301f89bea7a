//! In-Memory Repository Implementations

use std::sync::Arc;

use auth::InMemoryUserRepository;
use auth::domain::repository::UserRepository;
use auth::models::UserName;
use tokio::sync::RwLock;

use crate::domain::entity::character::{Character, NewCharacter};
use crate::domain::repository::CharacterRepository;
use crate::domain::value_object::{character_id::CharacterId, character_name::CharacterName};
use crate::error::{CharacterError, CharacterResult};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Character>,
    next_id: i64,
}

/// Character storage held in process memory
///
/// Owners are resolved through the shared user directory, mirroring the
/// join the SQL implementation performs.
#[derive(Debug, Clone)]
pub struct InMemoryCharacterRepository {
    users: InMemoryUserRepository,
    table: Arc<RwLock<Table>>,
}

impl InMemoryCharacterRepository {
    pub fn new(users: InMemoryUserRepository) -> Self {
        Self {
            users,
            table: Arc::new(RwLock::new(Table::default())),
        }
    }
}

impl CharacterRepository for InMemoryCharacterRepository {
    async fn name_exists(&self, character_name: &CharacterName) -> CharacterResult<bool> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .iter()
            .any(|c| &c.character_name == character_name))
    }

    async fn create(&self, character: &NewCharacter) -> CharacterResult<CharacterId> {
        // Check and insert under one write lock, like a UNIQUE constraint
        let mut table = self.table.write().await;
        if table
            .rows
            .iter()
            .any(|c| c.character_name == character.character_name)
        {
            return Err(CharacterError::NameTaken);
        }

        table.next_id += 1;
        let character_id = CharacterId::new(table.next_id);
        table.rows.push(character.clone().into_character(character_id));
        Ok(character_id)
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> CharacterResult<Vec<Character>> {
        let Some(user) = self.users.find_by_user_name(user_name).await? else {
            return Ok(Vec::new());
        };

        Ok(self
            .table
            .read()
            .await
            .rows
            .iter()
            .filter(|c| c.user_id == user.user_id)
            .cloned()
            .collect())
    }
}
