//! PostgreSQL Repository Implementations

use auth::models::{UserId, UserName};
use kernel::error::conversions::is_unique_violation;
use sqlx::PgPool;

use crate::domain::entity::character::{Character, NewCharacter};
use crate::domain::repository::CharacterRepository;
use crate::domain::value_object::{
    character_id::CharacterId, character_name::CharacterName, race::Race,
};
use crate::error::{CharacterError, CharacterResult};

/// PostgreSQL-backed character repository
#[derive(Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CharacterRepository for PgCharacterRepository {
    async fn name_exists(&self, character_name: &CharacterName) -> CharacterResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM characters WHERE name = $1)",
        )
        .bind(character_name.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, character: &NewCharacter) -> CharacterResult<CharacterId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO characters (user_id, name, race)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(character.user_id.value())
        .bind(character.character_name.as_str())
        .bind(character.race.code())
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(CharacterId::new(id))
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> CharacterResult<Vec<Character>> {
        let rows = sqlx::query_as::<_, CharacterRow>(
            r#"
            SELECT
                c.id,
                c.user_id,
                c.name,
                c.race
            FROM characters c
            JOIN users u ON u.id = c.user_id
            WHERE u.username = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CharacterRow::into_character).collect()
    }
}

/// A unique-name violation means another registration won the race
fn insert_error(err: sqlx::Error) -> CharacterError {
    if is_unique_violation(&err) {
        CharacterError::NameTaken
    } else {
        CharacterError::Database(err)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CharacterRow {
    id: i64,
    user_id: i64,
    name: String,
    race: String,
}

impl CharacterRow {
    fn into_character(self) -> CharacterResult<Character> {
        let character_name = CharacterName::from_db(&self.name)
            .map_err(|e| CharacterError::Internal(format!("Invalid character name: {}", e)))?;

        let race = Race::from_code(&self.race)
            .ok_or_else(|| CharacterError::Internal(format!("Invalid race code: {}", self.race)))?;

        Ok(Character {
            character_id: CharacterId::new(self.id),
            user_id: UserId::new(self.user_id),
            character_name,
            race,
        })
    }
}
