//! Handle rule
//!
//! User names and character names share one syntax: 6 to 30 ASCII
//! letters, digits or underscores (`^[a-zA-Z0-9_]{6,30}$`). Case is
//! preserved and significant.

use thiserror::Error;

/// Minimum handle length (in characters)
pub const HANDLE_MIN_LENGTH: usize = 6;

/// Maximum handle length (in characters)
pub const HANDLE_MAX_LENGTH: usize = 30;

/// Error returned when a handle does not match the rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleError {
    #[error("cannot be empty")]
    Empty,

    #[error("is too short ({length} chars, minimum {min})")]
    TooShort { length: usize, min: usize },

    #[error("is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[error("has invalid character '{char}' at position {position}; only a-z, A-Z, 0-9 and _ are allowed")]
    InvalidCharacter { char: char, position: usize },
}

/// Check `input` against the handle rule
///
/// ```
/// use kernel::handle::{validate_handle, HandleError};
/// assert!(validate_handle("alice_01").is_ok());
/// assert!(matches!(validate_handle("bob"), Err(HandleError::TooShort { .. })));
/// ```
pub fn validate_handle(input: &str) -> Result<(), HandleError> {
    if input.is_empty() {
        return Err(HandleError::Empty);
    }

    for (position, ch) in input.chars().enumerate() {
        if !is_handle_char(ch) {
            return Err(HandleError::InvalidCharacter { char: ch, position });
        }
    }

    // All chars are ASCII past this point, so byte length == char count
    let length = input.len();
    if length < HANDLE_MIN_LENGTH {
        return Err(HandleError::TooShort {
            length,
            min: HANDLE_MIN_LENGTH,
        });
    }
    if length > HANDLE_MAX_LENGTH {
        return Err(HandleError::TooLong {
            length,
            max: HANDLE_MAX_LENGTH,
        });
    }

    Ok(())
}

#[inline]
fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_boundaries() {
        assert!(validate_handle("abcdef").is_ok());
        assert!(validate_handle(&"a".repeat(30)).is_ok());
        assert!(validate_handle("Alice_01").is_ok());
        assert!(validate_handle("______").is_ok());
        assert!(validate_handle("123456").is_ok());
    }

    #[test]
    fn test_rejects_length() {
        assert_eq!(validate_handle(""), Err(HandleError::Empty));
        assert_eq!(
            validate_handle("abcde"),
            Err(HandleError::TooShort { length: 5, min: 6 })
        );
        assert_eq!(
            validate_handle(&"a".repeat(31)),
            Err(HandleError::TooLong { length: 31, max: 30 })
        );
    }

    #[test]
    fn test_rejects_characters() {
        assert_eq!(
            validate_handle("alice-01"),
            Err(HandleError::InvalidCharacter {
                char: '-',
                position: 5
            })
        );
        assert!(matches!(
            validate_handle("alice 01"),
            Err(HandleError::InvalidCharacter { char: ' ', .. })
        ));
        // Full-width letters are not normalized
        assert!(matches!(
            validate_handle("Ａlice_01"),
            Err(HandleError::InvalidCharacter { position: 0, .. })
        ));
    }
}
