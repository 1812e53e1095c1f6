// src/config/models.rs
use crate::client::{HealthCheckClient, DEFAULT_HOST};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const ENV_PREFIX: &str = "HEALTH_CHECK";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `HEALTH_CHECK_HOST` and `HEALTH_CHECK_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_prefix(ENV_PREFIX)
    }

    pub fn from_env_prefix(prefix: &str) -> Result<Self> {
        let config: ClientConfig = ::config::Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .add_source(::config::Environment::with_prefix(prefix).try_parsing(true))
            .build()
            .context("Failed to read environment configuration")?
            .try_deserialize()
            .context("Failed to parse environment configuration")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            bail!("Host cannot be empty");
        }

        let url = Url::parse(&self.host)
            .with_context(|| format!("Host {:?} is not a valid URL", self.host))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("Host must use http or https, got {:?}", url.scheme());
        }

        if self.timeout_secs == 0 {
            bail!("Timeout must be greater than 0");
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the transport with this timeout and wrap it in a client.
    pub fn build_client(&self) -> Result<HealthCheckClient> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(HealthCheckClient::new(http, &self.host)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let empty = ClientConfig {
            host: String::new(),
            ..ClientConfig::default()
        };
        assert!(empty.validate().is_err());

        let ftp = ClientConfig {
            host: "ftp://files.local".to_string(),
            ..ClientConfig::default()
        };
        assert!(ftp.validate().is_err());

        let zero_timeout = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_from_env_prefix_overrides_defaults() {
        std::env::set_var("HCC_ENV_TEST_HOST", "http://localhost:5000");
        std::env::set_var("HCC_ENV_TEST_TIMEOUT_SECS", "5");

        let config = ClientConfig::from_env_prefix("HCC_ENV_TEST").unwrap();
        assert_eq!(config.host, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 5);

        std::env::remove_var("HCC_ENV_TEST_HOST");
        std::env::remove_var("HCC_ENV_TEST_TIMEOUT_SECS");
    }

    #[test]
    fn test_from_env_prefix_without_variables_uses_defaults() {
        let config = ClientConfig::from_env_prefix("HCC_UNSET_PREFIX").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[tokio::test]
    async fn test_build_client_uses_host() {
        let config = ClientConfig {
            host: "http://localhost:5000".to_string(),
            timeout_secs: 1,
        };

        let client = config.build_client().unwrap();
        assert_eq!(client.host().as_str(), "http://localhost:5000/");
    }
}
