//! HTTP layer — transport abstraction, envelopes, and `DaemonHttp`.

pub mod client;
pub mod envelope;
#[cfg(feature = "http")]
pub mod native;
pub mod transport;

pub use client::DaemonHttp;
pub use envelope::Envelope;
#[cfg(feature = "http")]
pub use native::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
