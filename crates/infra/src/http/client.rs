use std::time::Duration;

use async_trait::async_trait;
use dinero_core::Transport;
use dinero_domain::constants::{CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use dinero_domain::{DineroError, Headers, HttpMethod, Result, TransportRequest, TransportResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;
use tracing::debug;

use crate::errors::InfraError;

/// reqwest-backed [`Transport`].
///
/// Every exchange is attempted exactly once. Non-success statuses are
/// returned as responses; only failures to obtain a response become errors.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let method = Self::method(request.method);
        let url = request.url;

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .timeout(request.timeout)
            .headers(header_map(&request.headers)?);
        if !request.body.is_empty() {
            builder = builder.body(request.body);
        }

        debug!(%method, %url, "sending HTTP request");
        let response = builder.send().await.map_err(|err| {
            debug!(%method, %url, error = %err, "HTTP request failed");
            DineroError::from(InfraError::from(err))
        })?;

        let status = response.status().as_u16();
        let headers: Headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let text = response.text().await.map_err(|err| DineroError::from(InfraError::from(err)))?;
        debug!(%method, %url, status, "received HTTP response");

        Ok(TransportResponse { status, headers, body: decode_body(&text) })
    }
}

/// One value per header name; a later entry replaces an earlier one whatever
/// its case.
fn header_map(headers: &Headers) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| DineroError::Transport(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            DineroError::Transport(format!("invalid value for header '{name}': {e}"))
        })?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Empty bodies become `null`; anything that is not JSON is kept as a string.
fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    connect_timeout: Duration,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
        }
    }
}

impl HttpClientBuilder {
    /// Upper bound for requests that do not carry their own timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .no_proxy()
            .build()
            .map_err(|err| DineroError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}
