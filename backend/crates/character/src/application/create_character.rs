//! Create Character Use Case
//!
//! Registers a new character for an authorized user.

use std::sync::Arc;

use auth::application::authorize::{AccountPolicy, AuthorizeUseCase, AuthorizedIdentity};
use auth::domain::repository::UserRepository;
use auth::AuthConfig;

use crate::domain::entity::character::NewCharacter;
use crate::domain::repository::CharacterRepository;
use crate::domain::value_object::{
    character_id::CharacterId, character_name::CharacterName, race::Race,
};
use crate::error::{CharacterError, CharacterResult};

/// Create character input
pub struct CreateCharacterInput {
    /// User name the request claims
    pub username: String,
    pub token: String,
    pub character_name: String,
    pub race: Race,
}

/// Create character use case
pub struct CreateCharacterUseCase<U, C>
where
    U: UserRepository,
    C: CharacterRepository,
{
    authorize: AuthorizeUseCase<U>,
    character_repo: Arc<C>,
}

impl<U, C> CreateCharacterUseCase<U, C>
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

    /// Authorize the caller, then register the character
    pub async fn execute(&self, input: CreateCharacterInput) -> CharacterResult<CharacterId> {
        let identity = self
            .authorize
            .execute(&input.username, &input.token, AccountPolicy::Registered)
            .await?;

        self.register(&identity, &input.character_name, input.race)
            .await
    }

    /// Register a character for an identity that already passed authorization
    pub async fn register(
        &self,
        identity: &AuthorizedIdentity,
        character_name: &str,
        race: Race,
    ) -> CharacterResult<CharacterId> {
        let character_name = CharacterName::new(character_name)?;

        if self.character_repo.name_exists(&character_name).await? {
            return Err(CharacterError::NameTaken);
        }

        let new_character = NewCharacter::new(identity.user.user_id, character_name, race);
        let character_id = self.character_repo.create(&new_character).await?;

        tracing::info!(
            user_name = %identity.user.user_name,
            platform = %identity.platform,
            character_name = %new_character.character_name,
            character_id = %character_id,
            "Character created"
        );

        Ok(character_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::character::Character;
    use crate::infra::memory::InMemoryCharacterRepository;
    use auth::domain::token;
    use auth::models::{Platform, User, UserId, UserName, UserStatus};
    use auth::{AuthError, InMemoryUserRepository};
    use std::time::Duration;

    /// Skips the advisory check so inserts race on the constraint
    #[derive(Clone)]
    struct NoPrecheck(InMemoryCharacterRepository);

    impl CharacterRepository for NoPrecheck {
        async fn name_exists(&self, _: &CharacterName) -> CharacterResult<bool> {
            Ok(false)
        }

        async fn create(&self, character: &NewCharacter) -> CharacterResult<CharacterId> {
            self.0.create(character).await
        }

        async fn find_by_user_name(&self, user_name: &UserName) -> CharacterResult<Vec<Character>> {
            self.0.find_by_user_name(user_name).await
        }
    }

    struct Fixture {
        users: InMemoryUserRepository,
        characters: InMemoryCharacterRepository,
        config: Arc<AuthConfig>,
    }

    impl Fixture {
        fn new() -> Self {
            let users = InMemoryUserRepository::with_users([
                User::new(
                    UserId::new(1),
                    UserName::new("alice_01").unwrap(),
                    Platform::Test,
                    UserStatus::Active,
                ),
                User::new(
                    UserId::new(2),
                    UserName::new("sleepy_01").unwrap(),
                    Platform::Steam,
                    UserStatus::Inactive,
                ),
            ]);
            Self {
                characters: InMemoryCharacterRepository::new(users.clone()),
                users,
                config: Arc::new(AuthConfig::development()),
            }
        }

        fn use_case(&self) -> CreateCharacterUseCase<InMemoryUserRepository, InMemoryCharacterRepository> {
            CreateCharacterUseCase::new(
                Arc::new(self.users.clone()),
                Arc::new(self.characters.clone()),
                self.config.clone(),
            )
        }

        fn input(&self, username: &str, character_name: &str) -> CreateCharacterInput {
            let token = token::issue(
                &UserName::new(username).unwrap(),
                Platform::Test,
                Duration::from_secs(3600),
                self.config.secret(),
            )
            .unwrap();
            CreateCharacterInput {
                username: username.to_string(),
                token,
                character_name: character_name.to_string(),
                race: Race::Human,
            }
        }
    }

    #[tokio::test]
    async fn test_create_character() {
        let fx = Fixture::new();
        let id = fx
            .use_case()
            .execute(fx.input("alice_01", "Hero_001"))
            .await
            .unwrap();

        let owned = fx
            .characters
            .find_by_user_name(&UserName::new("alice_01").unwrap())
            .await
            .unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].character_id, id);
        assert_eq!(owned[0].user_id, UserId::new(1));
        assert_eq!(owned[0].character_name.as_str(), "Hero_001");
        assert_eq!(owned[0].race, Race::Human);
    }

    #[tokio::test]
    async fn test_inactive_user_may_create() {
        let fx = Fixture::new();
        assert!(
            fx.use_case()
                .execute(fx.input("sleepy_01", "Dozer_001"))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_duplicate_name_is_taken() {
        let fx = Fixture::new();
        let use_case = fx.use_case();
        use_case
            .execute(fx.input("alice_01", "Hero_001"))
            .await
            .unwrap();

        assert!(matches!(
            use_case.execute(fx.input("sleepy_01", "Hero_001")).await,
            Err(CharacterError::NameTaken)
        ));
    }

    #[tokio::test]
    async fn test_rejections() {
        let fx = Fixture::new();
        let use_case = fx.use_case();

        assert!(matches!(
            use_case.execute(fx.input("alice_01", "bad name")).await,
            Err(CharacterError::InvalidInput(_))
        ));
        assert!(matches!(
            use_case.execute(fx.input("nobody_01", "Hero_001")).await,
            Err(CharacterError::Auth(AuthError::UnknownUser))
        ));

        let mut input = fx.input("alice_01", "Hero_001");
        input.username = "sleepy_01".to_string();
        assert!(matches!(
            use_case.execute(input).await,
            Err(CharacterError::Auth(AuthError::IdentityMismatch))
        ));

        let mut input = fx.input("alice_01", "Hero_001");
        input.token.push('x');
        assert!(matches!(
            use_case.execute(input).await,
            Err(CharacterError::Auth(
                AuthError::BadSignature | AuthError::Malformed
            ))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_registration_one_wins() {
        let fx = Fixture::new();
        let use_case = Arc::new(CreateCharacterUseCase::new(
            Arc::new(fx.users.clone()),
            Arc::new(NoPrecheck(fx.characters.clone())),
            fx.config.clone(),
        ));

        let first = {
            let use_case = use_case.clone();
            let input = fx.input("alice_01", "Racer_001");
            tokio::spawn(async move { use_case.execute(input).await })
        };
        let second = {
            let use_case = use_case.clone();
            let input = fx.input("sleepy_01", "Racer_001");
            tokio::spawn(async move { use_case.execute(input).await })
        };

        let results = [first.await.unwrap(), second.await.unwrap()];
        let created = results.iter().filter(|r| r.is_ok()).count();
        let taken = results
            .iter()
            .filter(|r| matches!(r, Err(CharacterError::NameTaken)))
            .count();
        assert_eq!((created, taken), (1, 1));
    }
}
