//! Configuration for the network side of the scraper.
//!
//! Extraction itself needs no configuration. Fetching does: the HTTP client
//! identity, its timeouts and the largest body it will accept are read from
//! the environment by `Config::from_env`, with defaults suitable for
//! scraping ordinary public pages.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

/// Environment variable names. Public so tests and callers can refer to them.
pub const ENV_USER_AGENT: &str = "METASCRAPER_USER_AGENT";
pub const ENV_TIMEOUT_SECS: &str = "METASCRAPER_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "METASCRAPER_CONNECT_TIMEOUT_SECS";
pub const ENV_MAX_BODY_BYTES: &str = "METASCRAPER_MAX_BODY_BYTES";
pub const ENV_MAX_REDIRECTS: &str = "METASCRAPER_MAX_REDIRECTS";

/// Defaults used when environment variables are absent.
const DEFAULT_USER_AGENT: &str = "metascraper/0.1 (+https://github.com/metascraper)";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_BODY_BYTES: u64 = 5 * 1024 * 1024; // 5MB
const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Fetcher runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    user_agent: String,
    timeout: Duration,
    connect_timeout: Duration,
    max_body_bytes: u64,
    max_redirects: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl Config {
    /// Load from environment variables, falling back to defaults.
    ///
    /// Numeric variables that are set but unparsable are an error rather
    /// than silently replaced by the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let user_agent =
            env::var(ENV_USER_AGENT).unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        let timeout = parse_var(ENV_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?;
        let connect_timeout = parse_var(ENV_CONNECT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)?;
        let max_body_bytes = parse_var(ENV_MAX_BODY_BYTES, DEFAULT_MAX_BODY_BYTES)?;
        let max_redirects = parse_var(ENV_MAX_REDIRECTS, DEFAULT_MAX_REDIRECTS)?;

        if timeout == 0 {
            return Err(ConfigError::InvalidValue {
                field: ENV_TIMEOUT_SECS,
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            user_agent,
            timeout: Duration::from_secs(timeout),
            connect_timeout: Duration::from_secs(connect_timeout),
            max_body_bytes,
            max_redirects,
        })
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: u64) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// User-Agent header sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
    /// Total time allowed for one request, body included.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
    /// Responses larger than this are refused.
    pub fn max_body_bytes(&self) -> u64 {
        self.max_body_bytes
    }
    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }
}

fn parse_var<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            field: key,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
