//! Network defaults for reaching the daemon.

/// Default base URL for the bundled `reqwest` transport.
///
/// The daemon normally listens on a Unix socket; point this at a TCP
/// forwarder, or inject a custom [`Transport`](crate::http::Transport).
pub const DEFAULT_BASE_URL: &str = "http://localhost";

/// `User-Agent` sent by the bundled transport.
pub const DEFAULT_USER_AGENT: &str = concat!("snapd-client/", env!("CARGO_PKG_VERSION"));
