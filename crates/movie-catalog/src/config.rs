//! Runtime configuration, read from the environment.

use std::env;
use tracing::warn;

/// Environment variable holding the request channel capacity of every service.
pub const CHANNEL_CAPACITY_VAR: &str = "CATALOG_CHANNEL_CAPACITY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Bound of each service's request channel. Callers wait once it is full.
    pub channel_capacity: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from `lookup`; absent, unparsable or zero values keep
    /// the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(CHANNEL_CAPACITY_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.channel_capacity = capacity,
                _ => warn!(
                    value = %raw,
                    default = config.channel_capacity,
                    "Ignoring invalid {}", CHANNEL_CAPACITY_VAR
                ),
            }
        }

        config
    }
}
