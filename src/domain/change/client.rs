//! Changes sub-client — inspect, abort, and wait for changes.

use crate::client::SnapdClient;
use crate::domain::change::{Change, ChangeActionRequest};
use crate::error::ClientError;
use std::time::Duration;

/// Sub-client for change operations.
pub struct Changes<'a> {
    pub(crate) client: &'a SnapdClient,
}

impl<'a> Changes<'a> {
    pub async fn get(&self, id: &str) -> Result<Change, ClientError> {
        self.client.http.get_change(id).await
    }

    /// Request that an in-flight change be aborted.
    pub async fn abort(&self, id: &str) -> Result<Change, ClientError> {
        self.client
            .http
            .post_change_action(id, &ChangeActionRequest::abort())
            .await
    }

    /// Poll until the change is ready and return its final state.
    ///
    /// A change that finished with an error is still returned as `Ok`;
    /// check [`Change::error`]. Any failed poll ends the wait immediately.
    pub async fn wait(&self, id: &str, poll_interval: Duration) -> Result<Change, ClientError> {
        loop {
            let change = self.get(id).await?;
            if change.ready {
                return Ok(change);
            }
            tracing::debug!(
                change = id,
                status = %change.status,
                delay_ms = poll_interval.as_millis() as u64,
                "Change not ready, polling again"
            );
            futures_timer::Delay::new(poll_interval).await;
        }
    }
}
