//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// User directory lookup
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by user name (exact match)
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;
}
