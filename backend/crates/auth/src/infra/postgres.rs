//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    platform::Platform, user_id::UserId, user_name::UserName, user_status::UserStatus,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                username,
                platform,
                status
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    platform: String,
    status: String,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let user_name = UserName::from_db(&self.username)
            .map_err(|e| AuthError::Internal(format!("Invalid username: {}", e)))?;

        let platform = Platform::from_code(&self.platform).ok_or_else(|| {
            AuthError::Internal(format!("Invalid platform code: {}", self.platform))
        })?;

        let user_status = UserStatus::from_code(&self.status)
            .ok_or_else(|| AuthError::Internal(format!("Invalid status code: {}", self.status)))?;

        Ok(User::new(UserId::new(self.id), user_name, platform, user_status))
    }
}
