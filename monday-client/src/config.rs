//! Client configuration loaded with Figment.
//!
//! Sources are merged in precedence order (later sources override earlier ones):
//! 1. Default values (hardcoded)
//! 2. An optional TOML file
//! 3. Environment variables with the `MONDAY_` prefix (`MONDAY_API_TOKEN`, …)

use std::fmt;
use std::path::Path;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Public GraphQL endpoint of the monday.com API.
pub const DEFAULT_ENDPOINT: &str = "https://api.monday.com/v2/";

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "MONDAY_";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`MondayClient`](crate::MondayClient).
///
/// `Debug` output never includes the API token.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Personal or app API token, sent verbatim as the `Authorization` header.
    #[serde(default)]
    pub api_token: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// Stand-in for secrets in `Debug` output.
pub(crate) fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "[REDACTED]"
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_token", &redacted(&self.api_token))
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("monday-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults with the given token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Load from defaults, an optional TOML file, and `MONDAY_*` environment variables.
    ///
    /// A file that is named explicitly must exist.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let config: ClientConfig = Self::figment(file)?.extract()?;
        config.validate()?;
        debug!(endpoint = %config.endpoint, timeout_secs = config.timeout_secs, "client configuration loaded");
        Ok(config)
    }

    fn figment(file: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(ClientConfig::default()));

        if let Some(path) = file {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Check that the configuration can be used to make requests.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                key: "endpoint".into(),
                message: format!("expected an http(s) URL, got '{}'", self.endpoint),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs".into(),
                message: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
