//! Character Name Value Object
//!
//! Unique across all characters. Same syntax as user names.

use kernel::handle::{HandleError, validate_handle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when character name validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Character name {0}")]
pub struct CharacterNameError(#[from] pub HandleError);

/// Validated character name
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    pub fn new(input: impl Into<String>) -> Result<Self, CharacterNameError> {
        let value = input.into();
        validate_handle(&value)?;
        Ok(Self(value))
    }

    /// Create from a stored value
    pub fn from_db(value: &str) -> Result<Self, CharacterNameError> {
        Self::new(value)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CharacterName").field(&self.0).finish()
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = CharacterNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_and_invalid() {
        assert_eq!(CharacterName::new("Hero_001").unwrap().as_str(), "Hero_001");
        assert!(matches!(
            CharacterName::new("hero"),
            Err(CharacterNameError(HandleError::TooShort { .. }))
        ));
        assert!(matches!(
            CharacterName::new("hero-0001"),
            Err(CharacterNameError(HandleError::InvalidCharacter { char: '-', .. }))
        ));
        assert!(CharacterName::new("h".repeat(31)).is_err());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            CharacterName::new("").unwrap_err().to_string(),
            "Character name cannot be empty"
        );
    }
}
