//! In-Memory Repository Implementations
//!
//! Used by tests and local tooling in place of PostgreSQL.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// User directory held in process memory, keyed by user name
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with a fixed set of users
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users
            .into_iter()
            .map(|u| (u.user_name.as_str().to_string(), u))
            .collect();
        Self {
            users: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert or replace a user
    pub async fn insert(&self, user: User) {
        self.users
            .write()
            .await
            .insert(user.user_name.as_str().to_string(), user);
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_name.as_str()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        platform::Platform, user_id::UserId, user_status::UserStatus,
    };

    #[tokio::test]
    async fn test_lookup_is_exact() {
        let repo = InMemoryUserRepository::new();
        repo.insert(User::new(
            UserId::new(1),
            UserName::new("alice_01").unwrap(),
            Platform::Steam,
            UserStatus::Active,
        ))
        .await;

        let found = repo
            .find_by_user_name(&UserName::new("alice_01").unwrap())
            .await
            .unwrap();
        assert_eq!(found.map(|u| u.user_id), Some(UserId::new(1)));

        let missing = repo
            .find_by_user_name(&UserName::new("ALICE_01").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
