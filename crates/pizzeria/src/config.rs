use std::{env, time::Duration};

/// Query cache configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache TTL in seconds; 0 keeps entries until invalidated (default: 0)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    pub cache_max_entries: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds, 0 for no expiry (default: 0)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            cache_ttl_seconds: lookup("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(10_000),
        }
    }

    /// Get cache TTL as a Duration, or `None` when entries never expire.
    pub fn cache_ttl(&self) -> Option<Duration> {
        (self.cache_ttl_seconds > 0).then(|| Duration::from_secs(self.cache_ttl_seconds))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = from_map(&[]);

        assert_eq!(config.cache_ttl_seconds, 0);
        assert_eq!(config.cache_max_entries, 10_000);
        assert_eq!(config.cache_ttl(), None);
    }

    #[test]
    fn test_values_from_vars() {
        let config = from_map(&[("CACHE_TTL_SECONDS", "600"), ("CACHE_MAX_ENTRIES", "50")]);

        assert_eq!(config.cache_ttl(), Some(Duration::from_secs(600)));
        assert_eq!(config.cache_max_entries, 50);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = from_map(&[("CACHE_TTL_SECONDS", "soon"), ("CACHE_MAX_ENTRIES", "0")]);

        assert_eq!(config.cache_ttl_seconds, 0);
        assert_eq!(config.cache_max_entries, 10_000);
    }
}
