//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Default `Cache-Control` max-age for `/images`, one day
pub const DEFAULT_ASSET_CACHE_MAX_AGE: u64 = 86_400;

/// Errors raised while reading configuration values
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a whole number of seconds, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be true or false, got {value:?}")]
    InvalidBool { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seconds static images may be cached by browsers
    /// Example: ASSET_CACHE_MAX_AGE=3600
    pub asset_cache_max_age: u64,

    /// Whether responses are compressed with brotli/gzip
    pub enable_compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let asset_cache_max_age = match lookup("ASSET_CACHE_MAX_AGE") {
            Some(value) => parse_seconds("ASSET_CACHE_MAX_AGE", &value)?,
            None => DEFAULT_ASSET_CACHE_MAX_AGE,
        };
        let enable_compression = match lookup("ENABLE_COMPRESSION") {
            Some(value) => parse_bool("ENABLE_COMPRESSION", &value)?,
            None => true,
        };

        Ok(Self {
            asset_cache_max_age,
            enable_compression,
        })
    }

    /// `Cache-Control` header value for static images
    pub fn asset_cache_control(&self) -> String {
        format!("public, max-age={}", self.asset_cache_max_age)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_cache_max_age: DEFAULT_ASSET_CACHE_MAX_AGE,
            enable_compression: true,
        }
    }
}

fn parse_seconds(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_config_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.asset_cache_max_age, 86_400);
        assert!(config.enable_compression);
    }

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup(&[
            ("ASSET_CACHE_MAX_AGE", "3600"),
            ("ENABLE_COMPRESSION", "off"),
        ]))
        .unwrap();

        assert_eq!(config.asset_cache_max_age, 3600);
        assert!(!config.enable_compression);
    }

    #[test]
    fn test_invalid_max_age() {
        let err = Config::from_lookup(lookup(&[("ASSET_CACHE_MAX_AGE", "a day")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                name: "ASSET_CACHE_MAX_AGE",
                value: "a day".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "ASSET_CACHE_MAX_AGE must be a whole number of seconds, got \"a day\""
        );
    }

    #[test]
    fn test_invalid_bool() {
        let err = Config::from_lookup(lookup(&[("ENABLE_COMPRESSION", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { .. }));
    }

    #[test]
    fn test_bool_is_case_insensitive() {
        let config = Config::from_lookup(lookup(&[("ENABLE_COMPRESSION", " TRUE ")])).unwrap();
        assert!(config.enable_compression);
    }

    #[test]
    fn test_asset_cache_control() {
        let config = Config {
            asset_cache_max_age: 60,
            enable_compression: true,
        };
        assert_eq!(config.asset_cache_control(), "public, max-age=60");
    }
}
