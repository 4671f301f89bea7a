//! User Status Value Object
//!
//! Account status is managed outside this service (admin tooling); the
//! service only reads it to decide whether an account may log in.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// User account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    /// Normal account - may receive tokens
    #[display("ACTIVE")]
    Active,

    /// Dormant account - cannot receive platform tokens
    #[display("INACTIVE")]
    Inactive,

    /// Blocked by an administrator
    #[display("BLOCKED")]
    Blocked,
}

impl UserStatus {
    /// Get string code for storage/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Blocked => "BLOCKED",
        }
    }

    /// Check if login is allowed
    #[inline]
    pub const fn can_login(&self) -> bool {
        match self {
            Self::Active => true,
            Self::Inactive | Self::Blocked => false,
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ACTIVE" => Some(Self::Active),
            "INACTIVE" => Some(Self::Inactive),
            "BLOCKED" => Some(Self::Blocked),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
