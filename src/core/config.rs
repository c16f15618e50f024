//! # Configuration
//!
//! Settings resolve as defaults → environment variables. A `.env` file in the
//! working directory is loaded by `main` before resolution. There is no
//! config file and no CLI flags.

use std::str::FromStr;
use std::time::Duration;

use log::{LevelFilter, debug, warn};

use crate::relays::DEFAULT_API_URL;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TICK_MS: u64 = 125;
pub const DEFAULT_TABLE_HEIGHT: usize = 10;
pub const DEFAULT_LOG_FILE: &str = "relayview.log";

pub const ENV_API_URL: &str = "RELAYVIEW_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "RELAYVIEW_TIMEOUT_SECS";
pub const ENV_TICK_MS: &str = "RELAYVIEW_TICK_MS";
pub const ENV_TABLE_HEIGHT: &str = "RELAYVIEW_TABLE_HEIGHT";
pub const ENV_LOG_FILE: &str = "RELAYVIEW_LOG_FILE";
pub const ENV_LOG_LEVEL: &str = "RELAYVIEW_LOG_LEVEL";

// ============================================================================
// Resolved Config
// ============================================================================

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub request_timeout: Duration,
    pub tick_rate: Duration,
    /// Visible table rows, also the page size for paging keys.
    pub table_height: usize,
    pub log_file: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            table_height: DEFAULT_TABLE_HEIGHT,
            log_file: DEFAULT_LOG_FILE.to_string(),
            log_level: LevelFilter::Debug,
        }
    }
}

impl Config {
    /// Resolves the config from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolves the config using `lookup` for environment values.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();

        let api_url = lookup(ENV_API_URL)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.api_url);

        let request_timeout = parse_or(&lookup, ENV_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let tick_rate = parse_or(&lookup, ENV_TICK_MS, DEFAULT_TICK_MS)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick_rate);

        let table_height =
            parse_or(&lookup, ENV_TABLE_HEIGHT, DEFAULT_TABLE_HEIGHT).unwrap_or(defaults.table_height);

        let log_file = lookup(ENV_LOG_FILE).unwrap_or(defaults.log_file);

        let log_level = match lookup(ENV_LOG_LEVEL) {
            Some(raw) => raw.trim().parse::<LevelFilter>().unwrap_or_else(|_| {
                warn!("Invalid {ENV_LOG_LEVEL}={raw:?}, using default");
                defaults.log_level
            }),
            None => defaults.log_level,
        };

        let config = Config {
            api_url,
            request_timeout,
            tick_rate,
            table_height,
            log_file,
            log_level,
        };
        debug!("Config: {:?}", config);
        config
    }
}

/// Parses `key` from the environment. Missing → `default`. Unparseable or
/// zero-like values are rejected with a warning and `None` is returned so
/// the caller falls back.
fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Option<T>
where
    T: FromStr + PartialEq + Default,
{
    let Some(raw) = lookup(key) else {
        return Some(default);
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => Some(value),
        Ok(_) => {
            warn!("{key}={raw:?} must be non-zero, using default");
            None
        }
        Err(_) => {
            warn!("Invalid {key}={raw:?}, using default");
            None
        }
    }
}
