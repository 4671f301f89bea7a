//! User Name Value Object
//!
//! The user name is the public handle a player logs in with. It is also
//! the identity carried inside issued tokens, so it must compare exactly:
//! no trimming, no case folding, no Unicode normalization.
//!
//! ## Invariants
//! - 6 to 30 characters
//! - ASCII letters, digits and `_` only

use kernel::handle::{HandleError, validate_handle};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use kernel::handle::{HANDLE_MAX_LENGTH as USER_NAME_MAX_LENGTH, HANDLE_MIN_LENGTH as USER_NAME_MIN_LENGTH};

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("User name {0}")]
pub struct UserNameError(#[from] pub HandleError);

/// Validated user name
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate raw input
    pub fn new(input: impl Into<String>) -> Result<Self, UserNameError> {
        let value = input.into();
        validate_handle(&value)?;
        Ok(Self(value))
    }

    /// Create from a stored value
    ///
    /// Rows are re-validated: a name that slipped past the schema is
    /// reported instead of silently trusted.
    pub fn from_db(value: &str) -> Result<Self, UserNameError> {
        Self::new(value)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserName {
    type Error = UserNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

// ============================================================================
// Tests
// ============================================================================
