//! Request bodies for `/v2/model`.

use serde::Serialize;

/// Body of `POST /v2/model`.
///
/// `new_model` is the caller's model text, carried as a JSON string without
/// any validation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RemodelRequest {
    #[serde(rename = "new-model")]
    pub new_model: String,
}

impl RemodelRequest {
    /// Non-UTF-8 input is converted lossily.
    pub fn new(new_model: &[u8]) -> Self {
        Self {
            new_model: String::from_utf8_lossy(new_model).into_owned(),
        }
    }
}
