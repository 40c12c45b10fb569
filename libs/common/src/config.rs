//! Client configuration
//!
//! Base URLs of the three Dodam backends plus the refresh endpoint, the
//! request timeout and where the session is persisted. Values come from
//! `DODAM_*` environment variables and fall back to local defaults.

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_DAUTH_API_URL: &str = "http://localhost:8081";
const DEFAULT_DGIT_API_URL: &str = "http://localhost:8082";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TOKEN_STORAGE_PATH: &str = ".dodam/token-storage.json";

/// How the refresh token travels to the refresh endpoint
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RefreshCredential {
    /// As a `refreshToken` cookie, the way a browser would send it
    #[default]
    Cookie,
    /// As a `refreshToken` field of a JSON body
    Body,
}

/// Configuration for the Dodam clients
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Main backend (members, meals, schedules, buses, ...)
    pub api_url: String,
    /// Client registry backend
    pub dauth_api_url: String,
    /// GitHub ranking backend
    pub dgit_api_url: String,
    /// Backend hosting `/auth/refresh`
    pub auth_api_url: String,
    /// Client-side timeout per request, in seconds
    pub request_timeout_secs: u64,
    /// File the session is persisted to
    pub token_storage_path: PathBuf,
    /// How the refresh token is sent to the refresh endpoint
    pub refresh_credential: RefreshCredential,
}

impl ClientConfig {
    /// Create a new ClientConfig from environment variables
    ///
    /// # Environment Variables
    /// - `DODAM_API_URL` (default: "http://localhost:8080")
    /// - `DODAM_DAUTH_API_URL` (default: "http://localhost:8081")
    /// - `DODAM_DGIT_API_URL` (default: "http://localhost:8082")
    /// - `DODAM_AUTH_API_URL` (default: same as `DODAM_API_URL`'s default)
    /// - `DODAM_REQUEST_TIMEOUT_SECS` (default: 10)
    /// - `DODAM_TOKEN_STORAGE_PATH` (default: ".dodam/token-storage.json")
    /// - `DODAM_REFRESH_CREDENTIAL`: `cookie` or `body` (default: cookie)
    pub fn from_env() -> ClientResult<Self> {
        Self::from_environment(Environment::with_prefix("DODAM"))
    }

    /// Load the configuration from an explicit environment source
    pub fn from_environment(environment: Environment) -> ClientResult<Self> {
        let config =
            Self::load(environment).map_err(|e| ClientError::Configuration(e.to_string()))?;
        debug!(
            api_url = %config.api_url,
            dauth_api_url = %config.dauth_api_url,
            dgit_api_url = %config.dgit_api_url,
            refresh_url = %config.refresh_url(),
            "Loaded client configuration"
        );
        Ok(config)
    }

    fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("dauth_api_url", DEFAULT_DAUTH_API_URL)?
            .set_default("dgit_api_url", DEFAULT_DGIT_API_URL)?
            .set_default("auth_api_url", DEFAULT_API_URL)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("token_storage_path", DEFAULT_TOKEN_STORAGE_PATH)?
            .set_default("refresh_credential", "cookie")?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Full URL of the credential refresh endpoint
    pub fn refresh_url(&self) -> String {
        format!("{}/auth/refresh", self.auth_api_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let mut source = config::Map::new();
        for (key, value) in vars {
            source.insert(key.to_string(), value.to_string());
        }
        Environment::with_prefix("DODAM").source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_environment(environment(&[])).unwrap();

        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.dauth_api_url, "http://localhost:8081");
        assert_eq!(config.dgit_api_url, "http://localhost:8082");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(
            config.token_storage_path,
            PathBuf::from(".dodam/token-storage.json")
        );
        assert_eq!(config.refresh_credential, RefreshCredential::Cookie);
        assert_eq!(config.refresh_url(), "http://localhost:8080/auth/refresh");
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_environment(environment(&[
            ("DODAM_API_URL", "https://dodam.example.com/api"),
            ("DODAM_AUTH_API_URL", "https://auth.example.com/"),
            ("DODAM_REQUEST_TIMEOUT_SECS", "3"),
            ("DODAM_REFRESH_CREDENTIAL", "body"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://dodam.example.com/api");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.refresh_credential, RefreshCredential::Body);
        assert_eq!(config.refresh_url(), "https://auth.example.com/auth/refresh");
    }

    #[test]
    fn test_invalid_refresh_credential() {
        let result =
            ClientConfig::from_environment(environment(&[("DODAM_REFRESH_CREDENTIAL", "header")]));
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }

    #[test]
    #[serial]
    fn test_client_config_from_env() {
        // SAFETY: every test touching the process environment is #[serial].
        unsafe { std::env::set_var("DODAM_DGIT_API_URL", "https://dgit.example.com") };
        let config = ClientConfig::from_env();
        unsafe { std::env::remove_var("DODAM_DGIT_API_URL") };

        let config = config.expect("Failed to create client config");
        assert_eq!(config.dgit_api_url, "https://dgit.example.com");
    }
}
