//! Low-level HTTP client — `DaemonHttp`.
//!
//! One method per daemon endpoint, plus the envelope handling they share.
//! Every call is a single round trip through the injected [`Transport`];
//! nothing is retried.

use crate::domain::change::{Change, ChangeActionRequest};
use crate::domain::model::RemodelRequest;
use crate::error::{ClientError, DecodeError};
use crate::http::envelope::Envelope;
use crate::http::transport::{HttpRequest, HttpResponse, Method, Transport};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing;

/// Model assertion and remodel endpoint.
pub const MODEL_PATH: &str = "/v2/model";
/// Serial assertion endpoint.
pub const SERIAL_PATH: &str = "/v2/model/serial";
/// Change endpoints live under this prefix.
pub const CHANGES_PATH: &str = "/v2/changes";

/// Low-level HTTP client for the daemon's REST API.
#[derive(Clone)]
pub struct DaemonHttp {
    transport: Arc<dyn Transport>,
}

impl DaemonHttp {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    // ── Model ────────────────────────────────────────────────────────────

    /// Start a remodel; returns the change id.
    pub async fn post_model(&self, request: &RemodelRequest) -> Result<String, ClientError> {
        self.post_async(MODEL_PATH, request).await
    }

    /// Raw text of the current model assertion.
    pub async fn get_model_assertion(&self) -> Result<Vec<u8>, ClientError> {
        self.get_raw(MODEL_PATH).await
    }

    /// Raw text of the current serial assertion.
    pub async fn get_serial_assertion(&self) -> Result<Vec<u8>, ClientError> {
        self.get_raw(SERIAL_PATH).await
    }

    // ── Changes ──────────────────────────────────────────────────────────

    pub async fn get_change(&self, id: &str) -> Result<Change, ClientError> {
        self.get_sync(&change_path(id)).await
    }

    pub async fn post_change_action(
        &self,
        id: &str,
        action: &ChangeActionRequest,
    ) -> Result<Change, ClientError> {
        self.post_sync(&change_path(id), action).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        tracing::debug!(
            method = request.method.as_str(),
            path = %request.path,
            "Sending request to daemon"
        );
        Ok(self.transport.send(request).await?)
    }

    /// GET whose successful answer is not JSON-wrapped.
    async fn get_raw(&self, path: &str) -> Result<Vec<u8>, ClientError> {
        let resp = self.send(HttpRequest::new(Method::Get, path)).await?;
        if resp.status != 200 {
            return Err(parse_error(&resp));
        }
        Ok(resp.body)
    }

    async fn get_sync<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self.send(HttpRequest::new(Method::Get, path)).await?;
        decode_sync(&resp)
    }

    async fn post_sync<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self.send(json_request(Method::Post, path, body)?).await?;
        decode_sync(&resp)
    }

    async fn post_async<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ClientError> {
        let resp = self.send(json_request(Method::Post, path, body)?).await?;
        match read_envelope(&resp)? {
            Envelope::Async(rsp) => rsp
                .change
                .filter(|id| !id.is_empty())
                .ok_or_else(|| DecodeError::MissingChange.into()),
            other => Err(DecodeError::UnexpectedType {
                expected: "async",
                got: other.type_name(),
            }
            .into()),
        }
    }
}

fn change_path(id: &str) -> String {
    format!("{}/{}", CHANGES_PATH, urlencoding::encode(id))
}

fn json_request<B: Serialize>(
    method: Method,
    path: &str,
    body: &B,
) -> Result<HttpRequest, ClientError> {
    let body = serde_json::to_vec(body).map_err(DecodeError::from)?;
    Ok(HttpRequest::new(method, path)
        .with_header("Content-Type", "application/json")
        .with_body(body))
}

/// Parse the envelope, turning an error envelope into [`ClientError::Daemon`].
fn read_envelope(resp: &HttpResponse) -> Result<Envelope, ClientError> {
    let envelope: Envelope = match serde_json::from_slice(&resp.body) {
        Ok(env) => env,
        Err(_) if !resp.is_success() && !resp.is_json() => return Err(server_error(resp)),
        Err(e) => return Err(DecodeError::Json(e).into()),
    };

    match envelope {
        Envelope::Error(err) => {
            let err = err.into_daemon_error(resp.status);
            tracing::warn!(
                status = err.status_code,
                kind = err.kind.as_ref().map(|k| k.as_str()).unwrap_or(""),
                "Daemon returned error: {}",
                err.message
            );
            Err(err.into())
        }
        other => Ok(other),
    }
}

fn decode_sync<T: DeserializeOwned>(resp: &HttpResponse) -> Result<T, ClientError> {
    match read_envelope(resp)? {
        Envelope::Sync(rsp) => {
            Ok(serde_json::from_value(rsp.result).map_err(DecodeError::from)?)
        }
        other => Err(DecodeError::UnexpectedType {
            expected: "sync",
            got: other.type_name(),
        }
        .into()),
    }
}

/// Interpret a non-200 answer from an endpoint that is not JSON-wrapped on
/// success. Only a JSON error envelope becomes a daemon error.
fn parse_error(resp: &HttpResponse) -> ClientError {
    if !resp.is_json() {
        return server_error(resp);
    }
    match read_envelope(resp) {
        Err(e) => e,
        Ok(other) => DecodeError::UnexpectedType {
            expected: "error",
            got: other.type_name(),
        }
        .into(),
    }
}

fn server_error(resp: &HttpResponse) -> ClientError {
    DecodeError::Server {
        status: resp.status,
        body: String::from_utf8_lossy(&resp.body).into_owned(),
    }
    .into()
}
