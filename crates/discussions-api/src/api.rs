//! Entry point tying a session to the resource clients.

use crate::channels::{ChannelSchema, ChannelsApi};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::transport::{ReqwestTransport, Transport};
use std::sync::Arc;
use tracing::debug;

/// Discussions API client.
///
/// Owns one session and hands out resource clients that share it.
#[derive(Debug, Clone)]
pub struct OpenDiscussionsApi<T = ReqwestTransport> {
    transport: Arc<T>,
    base_url: String,
    schema: ChannelSchema,
}

impl OpenDiscussionsApi<ReqwestTransport> {
    /// Build a client with a reqwest session from `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        debug!(base_url = %config.base_url, authenticated = config.api_token.is_some(), "discussions client ready");
        Ok(Self {
            transport: Arc::new(transport),
            base_url: config.base_url,
            schema: config.schema,
        })
    }

    /// Build a client from `OPEN_DISCUSSIONS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> OpenDiscussionsApi<T> {
    /// Use a caller-supplied transport.
    pub fn with_transport(transport: T, base_url: impl Into<String>, schema: ChannelSchema) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url: base_url.into(),
            schema,
        }
    }

    /// Client for the channels resource.
    pub fn channels(&self) -> ChannelsApi<Arc<T>> {
        ChannelsApi::with_schema(
            Arc::clone(&self.transport),
            self.base_url.clone(),
            self.schema.clone(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
