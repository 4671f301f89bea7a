//! Login Platform
//!
//! The platform a user account belongs to and a token was issued for.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Login platform
///
/// Stored and transmitted as its upper-case code (`TEST`, `STEAM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    /// Debug-mode logins, issued without any identity check
    #[display("TEST")]
    Test,

    /// Steam logins
    #[display("STEAM")]
    Steam,
}

impl Platform {
    /// Get string code for storage/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Test => "TEST",
            Self::Steam => "STEAM",
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "TEST" => Some(Self::Test),
            "STEAM" => Some(Self::Steam),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for platform in [Platform::Test, Platform::Steam] {
            assert_eq!(Platform::from_code(platform.code()), Some(platform));
            assert_eq!(platform.to_string(), platform.code());
        }
        assert_eq!(Platform::from_code("steam"), None);
        assert_eq!(Platform::from_code("EPIC"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Platform::Steam).unwrap(), r#""STEAM""#);
        let parsed: Platform = serde_json::from_str(r#""TEST""#).unwrap();
        assert_eq!(parsed, Platform::Test);
        assert!(serde_json::from_str::<Platform>(r#""Test""#).is_err());
    }
}
