use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::{
    header::{self, HeaderMap},
    Method, StatusCode,
};
use serde::de::DeserializeOwned;

use crate::{Payload, TransportError};

/// Performs one request/response exchange with a JSON body.
///
/// Implementations decide which failures are client-class by returning
/// [`TransportError::Client`]; every other error is retried.
pub trait Transport: Send + Sync {
    fn request(
        &self,
        method: Method,
        url: &str,
        payload: &Payload,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Buffered response returned by a [`Transport`].
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with no headers.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Numeric status code.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// True for statuses in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

/// [`Transport`] backed by `reqwest`.
///
/// A 4xx status becomes [`TransportError::Client`]; other statuses are
/// returned as responses and every `reqwest` error is
/// [`TransportError::Request`]. A 2xx or 4xx whose body cannot be read keeps
/// its classification with an empty body.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    timeout_ms: u64,
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

    /// Creates a transport with a fresh `reqwest::Client` and the default timeout.
    pub fn new() -> Self {
        Self::from_client(reqwest::Client::new())
    }

    /// Reuses an existing client and its connection pool.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self {
            http,
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
        }
    }

    /// Sets the timeout applied to each individual request.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Per-request timeout in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}

impl Transport for ReqwestTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        payload: &Payload,
    ) -> Result<HttpResponse, TransportError> {
        let response = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(Duration::from_millis(self.timeout_ms))
            .json(payload)
            .send()
            .await
            .map_err(TransportError::Request)?;

        let status = response.status();
        let headers = response.headers().clone();
        // The status line is already in hand; a 2xx or 4xx decides the call
        // even when the body is cut short.
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) if status.is_success() || status.is_client_error() => {
                tracing::warn!(
                    status = status.as_u16(),
                    error = %err,
                    "response body could not be read"
                );
                String::new()
            }
            Err(err) => return Err(TransportError::Request(err)),
        };

        if status.is_client_error() {
            return Err(TransportError::Client {
                status: status.as_u16(),
                body,
            });
        }

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
