//! Default transport over `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::TransportError;
use crate::http::transport::{HttpRequest, HttpResponse, Method, Transport};

/// `reqwest`-backed transport rooted at a base URL.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: String,
    client: Client,
}

impl ReqwestTransport {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_options(base_url, None, None)
    }

    pub fn with_options(
        base_url: &str,
        user_agent: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(ua) = user_agent {
            builder = builder.user_agent(ua);
        }
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().map_err(TransportError::new)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut req = self.client.request(method, &url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            req = req.body(body);
        }

        let resp = req.send().await.map_err(TransportError::new)?;
        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = resp.bytes().await.map_err(TransportError::new)?;

        Ok(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
