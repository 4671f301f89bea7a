//! Issue Token Use Cases
//!
//! Mint signed tokens for the test and Steam login paths.

use std::sync::Arc;

use crate::application::authorize::{AccountPolicy, check_policy};
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::token;
use crate::domain::value_object::{platform::Platform, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Issue token output
pub struct IssueTokenOutput {
    pub token: String,
}

/// Test issuance: any well-formed user name, only while debug is on
pub struct IssueTestTokenUseCase {
    config: Arc<AuthConfig>,
}

impl IssueTestTokenUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, username: &str) -> AuthResult<IssueTokenOutput> {
        if !self.config.debug {
            return Err(AuthError::ConfigDisabled);
        }

        let user_name = UserName::new(username)?;
        let token = token::issue(
            &user_name,
            Platform::Test,
            self.config.test_token_ttl,
            self.config.secret(),
        )?;

        tracing::info!(user_name = %user_name, platform = %Platform::Test, "Test token issued");

        Ok(IssueTokenOutput { token })
    }
}

/// Steam issuance: registered, active Steam accounts only
pub struct IssueSteamTokenUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> IssueSteamTokenUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, username: &str) -> AuthResult<IssueTokenOutput> {
        let user_name = UserName::new(username)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .filter(|u| u.platform == Platform::Steam)
            .ok_or(AuthError::UnknownPlatformUser)?;
        let user = check_policy(user, AccountPolicy::Active)?;

        // Steam ownership of the account is not proven here
        tracing::debug!(user_name = %user.user_name, "Steam identity not verified");

        let token = token::issue(
            &user.user_name,
            Platform::Steam,
            self.config.steam_token_ttl,
            self.config.secret(),
        )?;

        tracing::info!(user_name = %user.user_name, platform = %Platform::Steam, "Steam token issued");

        Ok(IssueTokenOutput { token })
    }
}
