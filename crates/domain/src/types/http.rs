//! Transport-level request/response values
//!
//! These are the only shapes that cross the transport port; the concrete
//! HTTP stack lives in the infrastructure crate.

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::Value;

use crate::impl_wire_enum_conversions;

pub type Headers = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl_wire_enum_conversions!(HttpMethod {
    Get => "GET",
    Post => "POST",
});

#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: String,
    pub headers: Headers,
    pub timeout: Duration,
}

impl TransportRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>, timeout: Duration) -> Self {
        Self { method, url: url.into(), body: String::new(), headers: Headers::new(), timeout }
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Merge `headers` over the current ones; later values win. Names
    /// compare case-insensitively, so `content-type` replaces `Content-Type`.
    #[must_use]
    pub fn headers(mut self, headers: Headers) -> Self {
        for (name, value) in headers {
            self.headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
            self.headers.insert(name, value);
        }
        self
    }
}

/// Response obtained from the server, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: Headers,
    /// Decoded JSON body. Empty bodies are `null`; non-JSON bodies are kept
    /// as a JSON string.
    pub body: Value,
}

impl TransportResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, headers: Headers::new(), body }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
