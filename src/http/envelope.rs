//! Wire envelope wrapping every JSON response from the daemon.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{DaemonError, ErrorKind};

/// Response envelope, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Envelope {
    Sync(SyncResponse),
    Async(AsyncResponse),
    Error(ErrorResponse),
}

impl Envelope {
    pub fn type_name(&self) -> &'static str {
        match self {
            Envelope::Sync(_) => "sync",
            Envelope::Async(_) => "async",
            Envelope::Error(_) => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SyncResponse {
    #[serde(rename = "status-code", default)]
    pub status_code: u16,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub result: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AsyncResponse {
    #[serde(rename = "status-code", default)]
    pub status_code: u16,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub change: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "status-code", default)]
    pub status_code: u16,
    #[serde(default)]
    pub status: String,
    pub result: ErrorResult,
}

/// `result` of an error envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorResult {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub kind: Option<ErrorKind>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl ErrorResponse {
    /// Convert into a [`DaemonError`]; `http_status` fills in a missing
    /// `status-code`.
    pub fn into_daemon_error(self, http_status: u16) -> DaemonError {
        DaemonError {
            message: self.result.message,
            kind: self.result.kind,
            value: self.result.value,
            status_code: if self.status_code != 0 {
                self.status_code
            } else {
                http_status
            },
        }
    }
}
