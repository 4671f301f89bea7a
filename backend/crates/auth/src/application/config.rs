//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use zeroize::Zeroizing;

/// Lifetime of tokens minted by the test issuance endpoint
pub const TEST_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Token signing secret (HMAC-SHA256 key, any length)
    pub token_secret: Zeroizing<Vec<u8>>,
    /// Enables the test issuance endpoint
    pub debug: bool,
    /// Token TTL for test issuance (1 hour)
    pub test_token_ttl: Duration,
    /// Token TTL for Steam issuance
    pub steam_token_ttl: Duration,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"<redacted>")
            .field("debug", &self.debug)
            .field("test_token_ttl", &self.test_token_ttl)
            .field("steam_token_ttl", &self.steam_token_ttl)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: Zeroizing::new(Vec::new()),
            debug: false,
            test_token_ttl: TEST_TOKEN_TTL,
            steam_token_ttl: Duration::from_secs(24 * 3600), // 1 day
        }
    }
}

impl AuthConfig {
    /// Build from a loaded secret and the Steam TTL in hours
    pub fn new(token_secret: impl Into<Vec<u8>>, debug: bool, token_expire_hours: u64) -> Self {
        Self {
            token_secret: Zeroizing::new(token_secret.into()),
            debug,
            steam_token_ttl: Duration::from_secs(token_expire_hours.saturating_mul(3600)),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: Zeroizing::new(platform::crypto::random_bytes(32)),
            ..Default::default()
        }
    }

    /// Create config for development (test issuance enabled)
    pub fn development() -> Self {
        Self {
            debug: true,
            ..Self::with_random_secret()
        }
    }

    /// Get signing secret as slice
    pub fn secret(&self) -> &[u8] {
        &self.token_secret
    }
}
