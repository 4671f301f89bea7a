//! Authorize Use Case
//!
//! Validates a presented token against the identity the request claims.
//! Every protected endpoint goes through here; nothing downstream trusts
//! client-supplied identity.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::token::{self, Claims};
use crate::domain::value_object::{platform::Platform, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Account requirements of a flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountPolicy {
    /// The user must exist
    Registered,
    /// The user must exist and be allowed to log in
    Active,
}

/// Identity that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedIdentity {
    pub user: User,
    /// Platform the token was issued for
    pub platform: Platform,
}

/// Authorize use case
pub struct AuthorizeUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> AuthorizeUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Validate the token and bind it to `presented_username`
    pub fn verify(&self, presented_username: &str, token: &str) -> AuthResult<Claims> {
        let claims = token::validate(token, self.config.secret())?;
        bind_identity(claims, presented_username)
    }

    /// Verify the token, then check the account against `policy`
    pub async fn execute(
        &self,
        presented_username: &str,
        token: &str,
        policy: AccountPolicy,
    ) -> AuthResult<AuthorizedIdentity> {
        let claims = self.verify(presented_username, token)?;
        let user_name = UserName::new(claims.username.as_str())?;

        let user = self.user_repo.find_by_user_name(&user_name).await?;
        let user = admit(user, policy)?;

        tracing::debug!(
            user_name = %user.user_name,
            platform = %claims.platform,
            "Request authorized"
        );

        Ok(AuthorizedIdentity {
            user,
            platform: claims.platform,
        })
    }
}

fn bind_identity(claims: Claims, presented_username: &str) -> AuthResult<Claims> {
    if claims.username != presented_username {
        tracing::warn!(
            user_name = %presented_username,
            platform = %claims.platform,
            "Token identity mismatch"
        );
        return Err(AuthError::IdentityMismatch);
    }
    Ok(claims)
}

/// Apply an account policy to a directory lookup result
pub(crate) fn admit(user: Option<User>, policy: AccountPolicy) -> AuthResult<User> {
    let user = user.ok_or(AuthError::UnknownUser)?;
    check_policy(user, policy)
}

pub(crate) fn check_policy(user: User, policy: AccountPolicy) -> AuthResult<User> {
    match policy {
        AccountPolicy::Registered => Ok(user),
        AccountPolicy::Active if user.can_login() => Ok(user),
        AccountPolicy::Active => Err(AuthError::InactiveUser),
    }
}
