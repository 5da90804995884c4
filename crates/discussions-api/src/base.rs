//! Shared plumbing for resource clients.

use crate::transport::Transport;

/// Holds the transport and API root every resource client builds on.
#[derive(Debug, Clone)]
pub struct BaseApi<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> BaseApi<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Join `path` onto the API root.
    ///
    /// Exactly one `/` separates the two; the path's own trailing slash is kept.
    pub fn resolve(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
