//! Storage configuration read from the environment.

use anyhow::{Context, Result};
use std::env;

/// Database URL used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite:expenses.db";

/// Pool size used when `DATABASE_MAX_CONNECTIONS` is not set
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl StorageConfig {
    /// Load configuration from `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid DATABASE_MAX_CONNECTIONS: {}", raw))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        if max_connections == 0 {
            anyhow::bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorageConfig::from_lookup(lookup_from(&[])).expect("Failed to load config");
        assert_eq!(config, StorageConfig::default());
        assert_eq!(config.database_url, "sqlite:expenses.db");
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_reads_overrides() {
        let config = StorageConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite:/tmp/other.db"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
        ]))
        .expect("Failed to load config");

        assert_eq!(config.database_url, "sqlite:/tmp/other.db");
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn test_blank_url_falls_back_to_default() {
        let config = StorageConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")]))
            .expect("Failed to load config");
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_rejects_invalid_pool_size() {
        assert!(StorageConfig::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "many")])).is_err());
        assert!(StorageConfig::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "0")])).is_err());
    }
}
