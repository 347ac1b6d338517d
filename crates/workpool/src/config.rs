//! Pool configuration

use workpool_core::constants::{MAX_WORKERS, WORKER_NAME_PREFIX};
use workpool_core::{env_get, env_get_bool};

/// Configuration for a [`ThreadPool`](crate::ThreadPool)
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum number of worker threads (fixed after construction)
    pub capacity: usize,

    /// Prefix for worker thread names (`<prefix>-<id>`)
    pub thread_name_prefix: String,

    /// Raise the kprint level to Debug when the pool starts
    pub debug_logging: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        let num_cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        Self {
            capacity: num_cpus.min(MAX_WORKERS),
            thread_name_prefix: WORKER_NAME_PREFIX.to_string(),
            debug_logging: false,
        }
    }
}

impl PoolConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `WP_WORKERS` / `WP_DEBUG`
    pub fn from_env() -> Self {
        let base = Self::default();
        Self {
            capacity: env_get("WP_WORKERS", base.capacity),
            debug_logging: env_get_bool("WP_DEBUG", base.debug_logging),
            ..base
        }
    }

    /// Set the worker capacity
    pub fn capacity(mut self, n: usize) -> Self {
        self.capacity = n;
        self
    }

    /// Set the worker thread name prefix
    pub fn thread_name_prefix(mut self, prefix: &str) -> Self {
        self.thread_name_prefix = prefix.to_string();
        self
    }

    /// Enable debug logging
    pub fn debug_logging(mut self, enable: bool) -> Self {
        self.debug_logging = enable;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.capacity == 0 {
            return Err("capacity must be at least 1");
        }
        if self.capacity > MAX_WORKERS {
            return Err("capacity exceeds maximum");
        }
        if self.thread_name_prefix.is_empty() {
            return Err("thread_name_prefix must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PoolConfig::default();
        assert!(config.capacity >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = PoolConfig::new()
            .capacity(8)
            .thread_name_prefix("feed-fetcher")
            .debug_logging(true);
        assert_eq!(config.capacity, 8);
        assert_eq!(config.thread_name_prefix, "feed-fetcher");
        assert!(config.debug_logging);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = PoolConfig::new().capacity(0);
        assert_eq!(config.validate(), Err("capacity must be at least 1"));
    }

    #[test]
    fn test_oversized_capacity_rejected() {
        let config = PoolConfig::new().capacity(MAX_WORKERS + 1);
        assert_eq!(config.validate(), Err("capacity exceeds maximum"));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let config = PoolConfig::new().thread_name_prefix("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_override() {
        std::env::set_var("WP_WORKERS", "3");
        let config = PoolConfig::from_env();
        assert_eq!(config.capacity, 3);
        std::env::remove_var("WP_WORKERS");
    }
}
