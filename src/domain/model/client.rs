//! Model sub-client — remodel, current model and serial assertions.

use crate::assertion::Assertion;
use crate::client::SnapdClient;
use crate::domain::model::RemodelRequest;
use crate::error::{ClientError, DecodeError};

/// Sub-client for model operations.
pub struct Model<'a> {
    pub(crate) client: &'a SnapdClient,
}

impl<'a> Model<'a> {
    /// Ask the daemon to remodel the device. Returns the change id.
    ///
    /// `new_model` is forwarded as the `new-model` string as-is.
    pub async fn remodel(&self, new_model: impl AsRef<[u8]>) -> Result<String, ClientError> {
        let request = RemodelRequest::new(new_model.as_ref());
        self.client.http.post_model(&request).await
    }

    /// The model assertion the device is currently using.
    pub async fn current_model_assertion(&self) -> Result<Assertion, ClientError> {
        let raw = self.client.http.get_model_assertion().await?;
        self.decode(&raw)
    }

    /// The serial assertion the device is currently using.
    pub async fn current_serial_assertion(&self) -> Result<Assertion, ClientError> {
        let raw = self.client.http.get_serial_assertion().await?;
        self.decode(&raw)
    }

    fn decode(&self, raw: &[u8]) -> Result<Assertion, ClientError> {
        Ok(self
            .client
            .decoder
            .decode(raw)
            .map_err(DecodeError::from)?)
    }
}
