//! # snapd-client
//!
//! Async Rust client for the snapd REST API: remodeling, the device's
//! current model and serial assertions, and the changes the daemon runs on
//! the caller's behalf.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Assertions and their decoder, change records, errors
//! 2. **Transport** — `Transport` trait; `ReqwestTransport` behind the `http` feature
//! 3. **HTTP API** — `DaemonHttp`, one method per endpoint plus envelope handling
//! 4. **High-Level Client** — `SnapdClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use snapd_client::prelude::*;
//!
//! let client = SnapdClient::builder()
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! let model = client.model().current_model_assertion().await?;
//! let change_id = client.model().remodel(new_model_text).await?;
//! let change = client.changes().wait(&change_id, Duration::from_millis(250)).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Signed assertion documents and their text decoder.
pub mod assertion;

/// Domain modules (vertical slices): types, wire types, sub-clients.
pub mod domain;

/// Client error types.
pub mod error;

/// Network defaults.
pub mod network;

// ── Layer 2–3: Transport and HTTP API ────────────────────────────────────────

/// Transport abstraction, response envelopes, and `DaemonHttp`.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `SnapdClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Assertions
    pub use crate::assertion::{
        Assertion, AssertionDecoder, AssertionError, AssertionType, HeaderValue, TextDecoder,
    };

    // Domain types — change
    pub use crate::domain::change::{Change, Progress, Status, Task};

    // Errors
    pub use crate::error::{ClientError, DaemonError, DecodeError, ErrorKind, TransportError};

    // Network
    pub use crate::network::DEFAULT_BASE_URL;

    // Transport
    pub use crate::http::{HttpRequest, HttpResponse, Method, Transport};
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    // Client + sub-clients
    pub use crate::client::{ChangesClient, ModelClient, SnapdClient, SnapdClientBuilder};
}
