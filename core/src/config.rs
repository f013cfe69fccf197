//! SDK configuration.

use std::time::Duration;

/// Media type sent in the `Accept` header unless configured otherwise.
pub const DEFAULT_MEDIA_TYPE: &str = "application/json";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_BASE_URL: &str = "ACCOUNTS_API_BASE_URL";
pub const ENV_MEDIA_TYPE: &str = "ACCOUNTS_API_MEDIA_TYPE";
pub const ENV_TIMEOUT_SECS: &str = "ACCOUNTS_API_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
}

/// Settings used to build an SDK from a base address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    pub base_url: String,
    pub media_type: String,
    pub timeout: Duration,
}

impl SdkConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            media_type: DEFAULT_MEDIA_TYPE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `ACCOUNTS_API_BASE_URL` (required), `ACCOUNTS_API_MEDIA_TYPE` and
    /// `ACCOUNTS_API_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(ENV_BASE_URL).ok_or(ConfigError::Missing(ENV_BASE_URL))?;
        let mut config = Self::new(base_url);

        if let Some(media_type) = lookup(ENV_MEDIA_TYPE) {
            config.media_type = media_type;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout {
                    name: ENV_TIMEOUT_SECS,
                    value: value.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}
