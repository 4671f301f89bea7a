//! Service Settings
//!
//! Loaded once at startup from `TOWER_*` variables; immutable afterwards.

use std::net::SocketAddr;

use platform::config::{ConfigError, ConfigSource};
use zeroize::Zeroizing;

const DEFAULT_LISTEN_PORT: u16 = 8000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Database connection settings
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub name: String,
    pub password: Zeroizing<String>,
    pub max_connections: u32,
}

/// Service settings
pub struct Settings {
    /// Enables test issuance and debug logging
    pub debug: bool,
    /// Steam token TTL in hours
    pub token_expire_hours: u64,
    /// Token signing secret
    pub jwt_key: Zeroizing<String>,
    pub db: DbSettings,
    pub listen_addr: SocketAddr,
    /// Allowed CORS origins; empty disables cross-origin access
    pub cors_origins: Vec<String>,
}

impl Settings {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(&ConfigSource::process_env())
    }

    pub fn load<F>(source: &ConfigSource<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db = DbSettings {
            host: source.required("TOWER_DB_HOST")?,
            port: source.parse("TOWER_DB_PORT")?,
            user: source.required("TOWER_DB_USER")?,
            name: source.required("TOWER_DB_NAME")?,
            password: source.secret_file("TOWER_DB_PASSWORD_FILE")?,
            max_connections: source
                .parse_or("TOWER_DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
        };

        let listen_addr = source.parse_or(
            "TOWER_LISTEN_ADDR",
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_LISTEN_PORT)),
        )?;

        let cors_origins = source
            .optional("TOWER_CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            debug: source.flag("TOWER_DEBUG"),
            token_expire_hours: source.parse("TOWER_AUTH_TOKEN_EXPIRE_HOURS")?,
            jwt_key: source.secret_file("TOWER_AUTH_JWT_KEY_FILE")?,
            db,
            listen_addr,
            cors_origins,
        })
    }

    /// Default tracing filter when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "api=debug,auth=debug,character=debug,tower_http=debug"
        } else {
            "api=info,auth=info,character=info,tower_http=info"
        }
    }
}
