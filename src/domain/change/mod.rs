//! Change domain — daemon-tracked asynchronous operations.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use wire::ChangeActionRequest;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Lifecycle status of a change or task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Do,
    Doing,
    Done,
    Abort,
    Undo,
    Undoing,
    Hold,
    Error,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Do => "Do",
            Status::Doing => "Doing",
            Status::Done => "Done",
            Status::Abort => "Abort",
            Status::Undo => "Undo",
            Status::Undoing => "Undoing",
            Status::Hold => "Hold",
            Status::Error => "Error",
            Status::Other(s) => s,
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Do" => Status::Do,
            "Doing" => Status::Doing,
            "Done" => Status::Done,
            "Abort" => Status::Abort,
            "Undo" => Status::Undo,
            "Undoing" => Status::Undoing,
            "Hold" => Status::Hold,
            "Error" => Status::Error,
            _ => Status::Other(s),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Change ──────────────────────────────────────────────────────────────────

/// A change and its tasks, as reported by `GET /v2/changes/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub summary: String,
    pub status: Status,
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub ready: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
    #[serde(rename = "spawn-time")]
    pub spawn_time: DateTime<Utc>,
    #[serde(rename = "ready-time", default, skip_serializing_if = "Option::is_none")]
    pub ready_time: Option<DateTime<Utc>>,
}

impl Change {
    /// The failure reported for a finished change, if any.
    pub fn error(&self) -> Option<&str> {
        self.err.as_deref().filter(|e| !e.is_empty())
    }
}

/// One step of a change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub summary: String,
    pub status: Status,
    #[serde(default)]
    pub log: Vec<String>,
    #[serde(default)]
    pub progress: Progress,
    #[serde(rename = "spawn-time")]
    pub spawn_time: DateTime<Utc>,
    #[serde(rename = "ready-time", default, skip_serializing_if = "Option::is_none")]
    pub ready_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub label: String,
    pub done: u64,
    pub total: u64,
}
