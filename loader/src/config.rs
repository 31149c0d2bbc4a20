use std::num::ParseIntError;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Prefix for relative targets, e.g. `http://127.0.0.1:8000/api`
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("REQUEST_TIMEOUT_SECS must be a whole number, got {value:?}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl TransportConfig {
    /// Read the config from the environment.
    ///
    /// - BACKEND_URL: base url for relative targets
    ///   (default `http://127.0.0.1:8000`)
    /// - REQUEST_TIMEOUT_SECS: per-request timeout in seconds (default 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(base_url) = lookup("BACKEND_URL") {
            config.base_url = base_url;
        }
        if let Some(value) = lookup("REQUEST_TIMEOUT_SECS") {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|source| ConfigError::InvalidTimeout {
                    value: value.clone(),
                    source,
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}
