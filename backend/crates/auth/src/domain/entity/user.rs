//! User Entity
//!
//! Read-only view of an account row. Accounts are created and modified by
//! tooling outside this service.

use crate::domain::value_object::{
    platform::Platform, user_id::UserId, user_name::UserName, user_status::UserStatus,
};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned key
    pub user_id: UserId,
    /// Unique login handle
    pub user_name: UserName,
    /// Platform the account was registered on
    pub platform: Platform,
    pub user_status: UserStatus,
}

impl User {
    pub fn new(
        user_id: UserId,
        user_name: UserName,
        platform: Platform,
        user_status: UserStatus,
    ) -> Self {
        Self {
            user_id,
            user_name,
            platform,
            user_status,
        }
    }

    /// Check if user can login
    pub fn can_login(&self) -> bool {
        self.user_status.can_login()
    }
}
