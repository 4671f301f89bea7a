//! Configuration Sources
//!
//! Reads settings from environment-style key/value lookups. Secrets are
//! never passed inline: the variable names a file whose trimmed content
//! is the secret.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use zeroize::Zeroizing;

/// Error when a setting is missing or unusable
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("{name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },

    #[error("{name} points to unreadable file {path:?}: {source}")]
    SecretFile {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{name} points to empty file {path:?}")]
    EmptySecret { name: String, path: PathBuf },
}

/// Key/value lookup the settings are read from
///
/// Production code uses [`ConfigSource::process_env`]; tests pass a closure
/// over a map so they never mutate the process environment.
pub struct ConfigSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    lookup: F,
}

impl ConfigSource<fn(&str) -> Option<String>> {
    /// Read from the process environment
    pub fn process_env() -> Self {
        fn from_env(name: &str) -> Option<String> {
            std::env::var(name).ok()
        }
        Self { lookup: from_env }
    }
}

impl<F> ConfigSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }

    /// Value of `name`, treating blank values as unset
    pub fn optional(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.optional(name)
            .ok_or_else(|| ConfigError::Missing(name.to_string()))
    }

    /// Parse a required value
    pub fn parse<T>(&self, name: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.required(name)?;
        Self::parse_raw(name, raw)
    }

    /// Parse an optional value, falling back to `default` when unset
    pub fn parse_or<T>(&self, name: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.optional(name) {
            Some(raw) => Self::parse_raw(name, raw),
            None => Ok(default),
        }
    }

    /// `true` only when the value is exactly `"true"`; unset means `false`
    pub fn flag(&self, name: &str) -> bool {
        self.optional(name).as_deref() == Some("true")
    }

    /// Read the secret stored in the file named by `name`
    pub fn secret_file(&self, name: &str) -> Result<Zeroizing<String>, ConfigError> {
        let path = PathBuf::from(self.required(name)?);
        let content = Zeroizing::new(std::fs::read_to_string(&path).map_err(|source| {
            ConfigError::SecretFile {
                name: name.to_string(),
                path: path.clone(),
                source,
            }
        })?);

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptySecret {
                name: name.to_string(),
                path,
            });
        }
        Ok(Zeroizing::new(trimmed.to_string()))
    }

    fn parse_raw<T>(name: &str, raw: String) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name: name.to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> ConfigSource<impl Fn(&str) -> Option<String> + use<>> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigSource::new(move |name: &str| map.get(name).cloned())
    }

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("platform-config-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_required_and_optional() {
        let src = source(&[("A", "value"), ("BLANK", "   ")]);
        assert_eq!(src.required("A").unwrap(), "value");
        assert!(matches!(src.required("B"), Err(ConfigError::Missing(n)) if n == "B"));
        assert_eq!(src.optional("BLANK"), None);
    }

    #[test]
    fn test_parse() {
        let src = source(&[("PORT", "5432"), ("BAD", "abc")]);
        assert_eq!(src.parse::<u16>("PORT").unwrap(), 5432);
        assert!(matches!(
            src.parse::<u16>("BAD"),
            Err(ConfigError::Invalid { value, .. }) if value == "abc"
        ));
        assert_eq!(src.parse_or::<u32>("UNSET", 5).unwrap(), 5);
    }

    #[test]
    fn test_flag_is_exact_true() {
        let src = source(&[("ON", "true"), ("UPPER", "TRUE"), ("ONE", "1")]);
        assert!(src.flag("ON"));
        assert!(!src.flag("UPPER"));
        assert!(!src.flag("ONE"));
        assert!(!src.flag("UNSET"));
    }

    #[test]
    fn test_secret_file_is_trimmed() {
        let path = temp_file("secret", "  s3cret\n");
        let src = source(&[("KEY_FILE", path.to_str().unwrap())]);
        assert_eq!(src.secret_file("KEY_FILE").unwrap().as_str(), "s3cret");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_secret_file_errors() {
        let empty = temp_file("empty", "\n");
        let src = source(&[
            ("EMPTY_FILE", empty.to_str().unwrap()),
            ("MISSING_FILE", "/nonexistent/platform-config-secret"),
        ]);
        assert!(matches!(
            src.secret_file("EMPTY_FILE"),
            Err(ConfigError::EmptySecret { .. })
        ));
        assert!(matches!(
            src.secret_file("MISSING_FILE"),
            Err(ConfigError::SecretFile { .. })
        ));
        assert!(matches!(
            src.secret_file("UNSET_FILE"),
            Err(ConfigError::Missing(_))
        ));
        std::fs::remove_file(empty).ok();
    }
}
