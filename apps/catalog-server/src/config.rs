//! Server configuration.

use std::{env, str::FromStr};

use anyhow::Context;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Log level, used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Number of films returned by the popular listing when no count is given.
    pub popular_default_count: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            popular_default_count: 10,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup, falling back to the
    /// defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let popular_default_count = parse_or(
            &lookup,
            "REELBOOK_POPULAR_DEFAULT_COUNT",
            defaults.popular_default_count,
        )?;
        anyhow::ensure!(
            popular_default_count >= 0,
            "REELBOOK_POPULAR_DEFAULT_COUNT must not be negative, got {popular_default_count}"
        );

        Ok(Self {
            host: lookup("REELBOOK_SERVER_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "REELBOOK_SERVER_PORT", defaults.port)?,
            log_level: lookup("REELBOOK_LOG_LEVEL").unwrap_or(defaults.log_level),
            popular_default_count,
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.popular_default_count, 10);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("REELBOOK_SERVER_HOST", "127.0.0.1"),
            ("REELBOOK_SERVER_PORT", "9000"),
            ("REELBOOK_LOG_LEVEL", "debug"),
            ("REELBOOK_POPULAR_DEFAULT_COUNT", "5"),
        ]))
        .unwrap();

        assert_eq!(config.server_addr(), "127.0.0.1:9000");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.popular_default_count, 5);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("REELBOOK_SERVER_PORT", "not-a-port")]))
            .unwrap_err();
        assert!(err.to_string().contains("REELBOOK_SERVER_PORT"));
    }

    #[test]
    fn test_negative_popular_default_count() {
        let err = Config::from_lookup(lookup_from(&[("REELBOOK_POPULAR_DEFAULT_COUNT", "-3")]))
            .unwrap_err();
        assert!(err.to_string().contains("REELBOOK_POPULAR_DEFAULT_COUNT"));

        let config =
            Config::from_lookup(lookup_from(&[("REELBOOK_POPULAR_DEFAULT_COUNT", "0")])).unwrap();
        assert_eq!(config.popular_default_count, 0);
    }
}
