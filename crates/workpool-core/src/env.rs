//! Environment variable utilities
//!
//! Typed `env_get` helpers used by the kprint configuration and
//! `PoolConfig::from_env`.

use std::str::FromStr;

/// Get an environment variable parsed as `T`, or return the default
///
/// Works with any `FromStr` type; parse failures fall back to the default.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Get an environment variable as a boolean
///
/// Accepts "1", "true", "yes", "on" (case-insensitive) as true. Everything
/// else counts as false; an unset variable returns the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_returns_default() {
        let val: usize = env_get("__WP_TEST_UNSET__", 7);
        assert_eq!(val, 7);
        assert!(env_get_bool("__WP_TEST_UNSET__", true));
    }

    #[test]
    fn test_set_and_parse() {
        std::env::set_var("__WP_TEST_NUM__", "12");
        let val: usize = env_get("__WP_TEST_NUM__", 0);
        assert_eq!(val, 12);
        std::env::remove_var("__WP_TEST_NUM__");
    }

    #[test]
    fn test_parse_failure_falls_back() {
        std::env::set_var("__WP_TEST_BAD__", "not-a-number");
        let val: u32 = env_get("__WP_TEST_BAD__", 3);
        assert_eq!(val, 3);
        std::env::remove_var("__WP_TEST_BAD__");
    }

    #[test]
    fn test_bool_variants() {
        for truthy in ["1", "true", "YES", "on"] {
            std::env::set_var("__WP_TEST_BOOL__", truthy);
            assert!(env_get_bool("__WP_TEST_BOOL__", false), "{}", truthy);
        }
        for falsy in ["0", "false", "off", "garbage"] {
            std::env::set_var("__WP_TEST_BOOL__", falsy);
            assert!(!env_get_bool("__WP_TEST_BOOL__", true), "{}", falsy);
        }
        std::env::remove_var("__WP_TEST_BOOL__");
    }
}
