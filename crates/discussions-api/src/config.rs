//! Configuration for the discussions API client.

use crate::channels::ChannelSchema;
use crate::error::{ConfigError, Result};
use std::time::Duration;

/// Default API root for a locally running discussions server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8063/api/v0";

pub const BASE_URL_ENV: &str = "OPEN_DISCUSSIONS_BASE_URL";
pub const API_TOKEN_ENV: &str = "OPEN_DISCUSSIONS_API_TOKEN";
pub const USER_AGENT_ENV: &str = "OPEN_DISCUSSIONS_USER_AGENT";
pub const TIMEOUT_ENV: &str = "OPEN_DISCUSSIONS_TIMEOUT_SECS";

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 8;

/// Settings used to build a session and the resource clients on top of it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. "https://discussions.example.org/api/v0"
    pub base_url: String,

    /// Bearer token sent on every request when set.
    pub api_token: Option<String>,

    pub user_agent: String,

    /// Whole-request timeout applied by the session.
    pub timeout: Duration,

    pub connect_timeout: Duration,

    /// Recognized channel attributes and valid channel types.
    pub schema: ChannelSchema,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            user_agent: format!("discussions-api/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            schema: ChannelSchema::default(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at the given API root.
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            base_url: url.into(),
            ..Default::default()
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset or blank values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = read(BASE_URL_ENV) {
            config.base_url = url;
        }
        config.api_token = read(API_TOKEN_ENV);
        if let Some(agent) = read(USER_AGENT_ENV) {
            config.user_agent = agent;
        }
        if let Some(raw) = read(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|e| ConfigError::InvalidEnv {
                var: TIMEOUT_ENV,
                reason: format!("{e}"),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the API root.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bearer token.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the channel schema.
    pub fn schema(mut self, schema: ChannelSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Check that the configuration can produce a usable client.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(())
    }
}
