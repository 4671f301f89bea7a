//! Character Race

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Playable race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Race {
    #[display("HUMAN")]
    Human,
}

impl Race {
    /// Get string code for storage/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Human => "HUMAN",
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "HUMAN" => Some(Self::Human),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Race::from_code(Race::Human.code()), Some(Race::Human));
        assert_eq!(Race::from_code("human"), None);
        assert_eq!(Race::Human.to_string(), "HUMAN");
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Race::Human).unwrap(), r#""HUMAN""#);
        assert!(serde_json::from_str::<Race>(r#""ELF""#).is_err());
    }
}
