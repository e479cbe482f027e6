//! High-level client — `SnapdClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::assertion::{AssertionDecoder, TextDecoder};
use crate::domain::change::client::Changes;
use crate::domain::model::client::Model;
use crate::error::ClientError;
use crate::http::{DaemonHttp, Transport};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::change::client::Changes as ChangesClient;
pub use crate::domain::model::client::Model as ModelClient;

/// The primary entry point.
///
/// Provides nested sub-client accessors: `client.model()`,
/// `client.changes()`. Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct SnapdClient {
    pub(crate) http: DaemonHttp,
    pub(crate) decoder: Arc<dyn AssertionDecoder>,
}

impl SnapdClient {
    pub fn builder() -> SnapdClientBuilder {
        SnapdClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn model(&self) -> Model<'_> {
        Model { client: self }
    }

    pub fn changes(&self) -> Changes<'_> {
        Changes { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct SnapdClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
    decoder: Option<Arc<dyn AssertionDecoder>>,
}

impl Default for SnapdClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_BASE_URL.to_string(),
            user_agent: crate::network::DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            transport: None,
            decoder: None,
        }
    }
}

impl SnapdClientBuilder {
    /// Base URL for the bundled transport. Ignored when a transport is injected.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Per-request timeout for the bundled transport. None by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom transport instead of the bundled one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom assertion decoder instead of [`TextDecoder`].
    pub fn decoder(mut self, decoder: Arc<dyn AssertionDecoder>) -> Self {
        self.decoder = Some(decoder);
        self
    }

    pub fn build(self) -> Result<SnapdClient, ClientError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport(&self.base_url, &self.user_agent, self.timeout)?,
        };
        let decoder = self.decoder.unwrap_or_else(|| Arc::new(TextDecoder));

        Ok(SnapdClient {
            http: DaemonHttp::new(transport),
            decoder,
        })
    }
}

#[cfg(feature = "http")]
fn default_transport(
    base_url: &str,
    user_agent: &str,
    timeout: Option<Duration>,
) -> Result<Arc<dyn Transport>, ClientError> {
    let transport =
        crate::http::ReqwestTransport::with_options(base_url, Some(user_agent), timeout)
            .map_err(|e| ClientError::Config(format!("cannot build HTTP transport: {}", e)))?;
    Ok(Arc::new(transport))
}

#[cfg(not(feature = "http"))]
fn default_transport(
    _base_url: &str,
    _user_agent: &str,
    _timeout: Option<Duration>,
) -> Result<Arc<dyn Transport>, ClientError> {
    Err(ClientError::Config(
        "no transport configured: enable the `http` feature or call `transport()`".to_string(),
    ))
}

#[cfg(all(test, feature = "http"))]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_build() {
        assert!(SnapdClient::builder().build().is_ok());
    }

    #[test]
    fn test_builder_with_options_builds() {
        let client = SnapdClient::builder()
            .base_url("http://127.0.0.1:8080/")
            .user_agent("test-agent/1.0")
            .timeout(Duration::from_secs(5))
            .build();
        assert!(client.is_ok());
    }
}
