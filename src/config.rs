//! Server configuration from environment variables.
//!
//! `HOST` (default 0.0.0.0), `PORT` (default 8080), `INACTIVITY_TIMEOUT_HOURS`
//! (default 12) and `CLEANUP_INTERVAL_MINUTES` (default 30). Unparseable
//! values fall back to the default.

use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_INACTIVITY_HOURS: u64 = 12;
const DEFAULT_CLEANUP_MINUTES: u64 = 30;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tournaments not accessed for this long are removed.
    pub inactivity_timeout: Duration,
    /// How often the cleanup task runs.
    pub cleanup_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            inactivity_timeout: Duration::from_secs(DEFAULT_INACTIVITY_HOURS * 3600),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_MINUTES * 60),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parse_u64 = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());
        Self {
            host: lookup("HOST")
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            inactivity_timeout: parse_u64("INACTIVITY_TIMEOUT_HOURS")
                .map(|h| Duration::from_secs(h * 3600))
                .unwrap_or(defaults.inactivity_timeout),
            cleanup_interval: parse_u64("CLEANUP_INTERVAL_MINUTES")
                .filter(|m| *m > 0)
                .map(|m| Duration::from_secs(m * 60))
                .unwrap_or(defaults.cleanup_interval),
        }
    }
}
