//! Configuration for the Resource Controller SDK.

use std::time::Duration;

use crate::error::{Error, Result};

const ENV_URL: &str = "RESOURCE_CONTROLLER_URL";
const ENV_BEARER_TOKEN: &str = "RESOURCE_CONTROLLER_BEARER_TOKEN";
const ENV_TIMEOUT_MS: &str = "RESOURCE_CONTROLLER_TIMEOUT_MS";

/// Configuration for [`ResourceController`](crate::ResourceController).
#[derive(Clone)]
pub struct SdkConfig {
    /// Base URL of the service, without the `/v2` prefix.
    pub service_url: String,
    /// IAM access token sent as `Authorization: Bearer ...`.
    pub bearer_token: Option<String>,
    /// Total time allowed for one request.
    pub request_timeout: Duration,
    /// Time allowed to establish a connection.
    pub connect_timeout: Duration,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl std::fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkConfig")
            .field("service_url", &self.service_url)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            service_url: rc_api::DEFAULT_SERVICE_URL.to_string(),
            bearer_token: None,
            request_timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("rc-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl SdkConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RESOURCE_CONTROLLER_URL`: service URL (default: the public endpoint)
    /// - `RESOURCE_CONTROLLER_BEARER_TOKEN`: IAM access token (default: none)
    /// - `RESOURCE_CONTROLLER_TIMEOUT_MS`: request timeout in milliseconds (default: 60000)
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let service_url = std::env::var(ENV_URL).unwrap_or(defaults.service_url);

        let bearer_token = std::env::var(ENV_BEARER_TOKEN)
            .ok()
            .filter(|token| !token.trim().is_empty());

        let request_timeout = match std::env::var(ENV_TIMEOUT_MS) {
            Ok(raw) => Duration::from_millis(
                raw.parse()
                    .map_err(|e| Error::Config(format!("invalid {ENV_TIMEOUT_MS}: {e}")))?,
            ),
            Err(_) => defaults.request_timeout,
        };

        let config = Self {
            service_url,
            bearer_token,
            request_timeout,
            ..defaults
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the service URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.service_url).map_err(|e| {
            Error::Config(format!("invalid service URL {:?}: {e}", self.service_url))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::Config(format!(
                "unsupported service URL scheme: {other}"
            ))),
        }
    }

    /// Set the service URL.
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }

    /// Set the bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
