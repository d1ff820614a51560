//! Host server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RATE_LIMIT_PER_MINUTE: usize = 100;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub limit: usize,
    pub window: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub rate_limit: RateLimitConfig,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `RATE_LIMIT_PER_MINUTE`: requests per client IP per window, default 100
    /// - `RATE_LIMIT_WINDOW_SECS`: default 60
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let limit = parse_var(&lookup, "RATE_LIMIT_PER_MINUTE", DEFAULT_RATE_LIMIT_PER_MINUTE)?;
        let window_secs = parse_var(&lookup, "RATE_LIMIT_WINDOW_SECS", DEFAULT_RATE_LIMIT_WINDOW_SECS)?;
        if limit == 0 {
            return Err(ConfigError::Invalid { var: "RATE_LIMIT_PER_MINUTE", value: "0".to_owned() });
        }
        if window_secs == 0 {
            return Err(ConfigError::Invalid { var: "RATE_LIMIT_WINDOW_SECS", value: "0".to_owned() });
        }
        Ok(Self { port, rate_limit: RateLimitConfig { limit, window: Duration::from_secs(window_secs) } })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rate_limit: RateLimitConfig {
                limit: DEFAULT_RATE_LIMIT_PER_MINUTE,
                window: Duration::from_secs(DEFAULT_RATE_LIMIT_WINDOW_SECS),
            },
        }
    }
}

/// Unset or blank means default; anything else must parse.
fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
