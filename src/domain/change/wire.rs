//! Request bodies for `/v2/changes/{id}`.

use serde::Serialize;

/// Body of `POST /v2/changes/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChangeActionRequest {
    pub action: &'static str,
}

impl ChangeActionRequest {
    pub fn abort() -> Self {
        Self { action: "abort" }
    }
}
