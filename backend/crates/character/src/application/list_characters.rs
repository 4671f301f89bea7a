//! List Characters Use Case

use std::sync::Arc;

use auth::application::authorize::AuthorizeUseCase;
use auth::domain::repository::UserRepository;
use auth::models::UserName;
use auth::{AuthConfig, AuthError};

use crate::domain::entity::character::Character;
use crate::domain::repository::CharacterRepository;
use crate::error::CharacterResult;

/// List characters use case
///
/// Only the token binding is checked; a user without an account row simply
/// owns nothing.
pub struct ListCharactersUseCase<U, C>
where
    U: UserRepository,
    C: CharacterRepository,
{
    authorize: AuthorizeUseCase<U>,
    character_repo: Arc<C>,
}

impl<U, C> ListCharactersUseCase<U, C>
where
    U: UserRepository,
    C: CharacterRepository,
{
    pub fn new(user_repo: Arc<U>, character_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            authorize: AuthorizeUseCase::new(user_repo, config),
            character_repo,
        }
    }

    pub async fn execute(&self, username: &str, token: &str) -> CharacterResult<Vec<Character>> {
        let claims = self.authorize.verify(username, token)?;
        let user_name = UserName::new(claims.username).map_err(AuthError::from)?;

        let characters = self.character_repo.find_by_user_name(&user_name).await?;

        tracing::debug!(
            user_name = %user_name,
            count = characters.len(),
            "Characters listed"
        );

        Ok(characters)
    }
}
