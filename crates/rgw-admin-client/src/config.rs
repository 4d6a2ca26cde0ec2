//! Client configuration.
//!
//! Provides [`AdminConfig`] for connecting to a RADOS Gateway admin endpoint.
//! Values can be built in code or loaded from environment variables.

use std::fmt;
use std::time::Duration;

use rgw_admin_auth::{AuthError, DEFAULT_REGION, DEFAULT_SERVICE};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Admin client configuration.
///
/// # Examples
///
/// ```
/// use rgw_admin_client::config::AdminConfig;
///
/// let config = AdminConfig::builder()
///     .endpoint("http://rgw.local:8080")
///     .access_key("AKIDEXAMPLE")
///     .secret_key("secret")
///     .build();
/// assert_eq!(config.region, "default");
/// assert_eq!(config.timeout_secs, 3);
/// assert!(!format!("{config:?}").contains("secret\""));
/// ```
#[derive(Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminConfig {
    /// Gateway base URL, e.g. `http://rgw.local:8080`.
    #[builder(default, setter(into))]
    pub endpoint: String,

    /// Access key of an admin user.
    #[builder(default, setter(into))]
    pub access_key: String,

    /// Secret key of an admin user. Never serialized.
    #[builder(default, setter(into))]
    #[serde(skip_serializing)]
    pub secret_key: String,

    /// SigV4 region.
    #[builder(default = String::from(DEFAULT_REGION), setter(into))]
    pub region: String,

    /// SigV4 service.
    #[builder(default = String::from(DEFAULT_SERVICE), setter(into))]
    pub service: String,

    /// Request timeout in seconds.
    #[builder(default = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"), setter(into))]
    pub log_level: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            region: String::from(DEFAULT_REGION),
            service: String::from(DEFAULT_SERVICE),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: String::from("info"),
        }
    }
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("endpoint", &self.endpoint)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .field("service", &self.service)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `RGW_ENDPOINT` | *(empty)* |
    /// | `RGW_ACCESS_KEY`, then `AWS_ACCESS_KEY_ID` | *(empty)* |
    /// | `RGW_SECRET_KEY`, then `AWS_SECRET_ACCESS_KEY` | *(empty)* |
    /// | `RGW_REGION` | `default` |
    /// | `RGW_SERVICE` | `s3` |
    /// | `RGW_TIMEOUT_SECS` | `3` |
    /// | `LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = var("RGW_ENDPOINT") {
            config.endpoint = v;
        }
        if let Some(v) = var("RGW_ACCESS_KEY").or_else(|| var("AWS_ACCESS_KEY_ID")) {
            config.access_key = v;
        }
        if let Some(v) = var("RGW_SECRET_KEY").or_else(|| var("AWS_SECRET_ACCESS_KEY")) {
            config.secret_key = v;
        }
        if let Some(v) = var("RGW_REGION") {
            config.region = v;
        }
        if let Some(v) = var("RGW_SERVICE") {
            config.service = v;
        }
        if let Some(v) = var("RGW_TIMEOUT_SECS") {
            if let Ok(n) = v.parse::<u64>() {
                config.timeout_secs = n;
            }
        }
        if let Some(v) = var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// The request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Errors raised while setting up a client or preparing a request, before
/// anything is sent.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The endpoint is empty or whitespace.
    #[error("endpoint not set")]
    MissingEndpoint,

    /// The access key is empty or whitespace.
    #[error("access key not set")]
    MissingAccessKey,

    /// The secret key is empty or whitespace.
    #[error("secret key not set")]
    MissingSecretKey,

    /// The endpoint is not an absolute URI with scheme and host.
    #[error("invalid endpoint {0:?}: expected an absolute URI such as http://host:port")]
    InvalidEndpoint(String),

    /// The request URL could not be assembled.
    #[error("invalid request URL {url:?}")]
    InvalidRequestUrl {
        /// The URL that was rejected.
        url: String,
        /// The underlying error.
        #[source]
        source: http::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    /// The request could not be signed.
    #[error(transparent)]
    Signing(#[from] AuthError),
}
