use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Range cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of KV cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Days of padding applied around non-exact range loads (default: 3)
    pub range_buffer_days: i64,
    /// Quiet period for debounced range loads, in milliseconds (default: 300)
    pub debounce_ms: u64,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Range cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum KV cache entries (default: 10,000)
    /// - `RANGE_BUFFER_DAYS` - Padding days for range loads (default: 3)
    /// - `DEBOUNCE_MS` - Debounce quiet period in ms (default: 300)
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            range_buffer_days: env::var("RANGE_BUFFER_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            debounce_ms: env::var("DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Get the range cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the debounce quiet period as a Duration.
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
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

    #[test]
    fn test_duration_conversions() {
        let config = Config {
            cache_ttl_seconds: 600,
            cache_max_entries: 10_000,
            range_buffer_days: 3,
            debounce_ms: 250,
            redis_url: "redis://localhost:6379".to_string(),
        };

        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
        assert_eq!(config.debounce_window(), Duration::from_millis(250));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("CACHE_TTL_SECONDS");
        env::remove_var("CACHE_MAX_ENTRIES");
        env::remove_var("RANGE_BUFFER_DAYS");
        env::remove_var("DEBOUNCE_MS");
        env::remove_var("REDIS_URL");

        let config = Config::from_env();

        assert_eq!(config.cache_ttl_seconds, 300);
        assert_eq!(config.cache_max_entries, 10_000);
        assert_eq!(config.range_buffer_days, 3);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.redis_url, "redis://localhost:6379");
    }
}
