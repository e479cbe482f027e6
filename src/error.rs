//! Client error types.
//!
//! Every operation fails with a [`ClientError`], which keeps three cases
//! apart:
//!
//! - [`ClientError::Transport`]: the request never got an answer. The
//!   original cause is reachable through [`std::error::Error::source`].
//! - [`ClientError::Daemon`]: the daemon answered with an error envelope.
//!   Displays the daemon's `message` verbatim.
//! - [`ClientError::Decode`]: the daemon answered, but the body was not
//!   what the endpoint promises.

use std::error::Error as StdError;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::assertion::AssertionError;

/// Boxed error used to carry a transport's underlying cause.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Top-level client error.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("cannot communicate with server: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Daemon(#[from] DaemonError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    /// The daemon's error envelope, if that is what failed the request.
    pub fn daemon(&self) -> Option<&DaemonError> {
        match self {
            ClientError::Daemon(e) => Some(e),
            _ => None,
        }
    }

    /// Follow the `source()` chain to its last link.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }
}

/// Failure to exchange a request with the daemon.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl TransportError {
    /// Wrap an underlying error, keeping it as the source.
    pub fn new(source: impl Into<BoxError>) -> Self {
        let source = source.into();
        Self {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// A transport failure with no underlying error value.
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

/// Error envelope returned by the daemon.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct DaemonError {
    pub message: String,
    pub kind: Option<ErrorKind>,
    /// Extra detail whose shape depends on `kind` (e.g. `"model"`).
    pub value: Option<serde_json::Value>,
    pub status_code: u16,
}

impl DaemonError {
    pub fn is_kind(&self, kind: &ErrorKind) -> bool {
        self.kind.as_ref() == Some(kind)
    }

    /// `value` when the daemon sent it as a plain string.
    pub fn value_str(&self) -> Option<&str> {
        self.value.as_ref().and_then(|v| v.as_str())
    }
}

/// Machine-readable error kind from `result.kind`.
///
/// Kinds this crate does not know about are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ErrorKind {
    AssertionNotFound,
    LoginRequired,
    ChangeConflict,
    NetworkTimeout,
    DaemonRestart,
    Other(String),
}

impl ErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::AssertionNotFound => "assertion-not-found",
            Self::LoginRequired => "login-required",
            Self::ChangeConflict => "snap-change-conflict",
            Self::NetworkTimeout => "network-timeout",
            Self::DaemonRestart => "daemon-restart",
            Self::Other(kind) => kind,
        }
    }
}

impl From<String> for ErrorKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "assertion-not-found" => Self::AssertionNotFound,
            "login-required" => Self::LoginRequired,
            "snap-change-conflict" => Self::ChangeConflict,
            "network-timeout" => Self::NetworkTimeout,
            "daemon-restart" => Self::DaemonRestart,
            _ => Self::Other(kind),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The daemon answered, but not with what the endpoint promises.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("cannot decode response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected {expected} response, got {got}")]
    UnexpectedType {
        expected: &'static str,
        got: &'static str,
    },

    #[error("async response without change reference")]
    MissingChange,

    #[error("server error: status {status}")]
    Server { status: u16, body: String },

    #[error("failed to decode assertion: {0}")]
    Assertion(#[from] AssertionError),
}
